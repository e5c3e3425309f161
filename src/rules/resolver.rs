//! Call resolver: judges an action and applies its consequences.
//!
//! Resolution happens in two steps so that nothing is mutated unless the
//! action is accepted:
//!
//! 1. `CallResolver::judge` reads the registry and ledger and returns either a
//!    `Rejection` or a `Verdict` describing exactly what will happen.
//! 2. `apply` performs the verdict's mutations, credits the ledger, and
//!    computes the next turn.
//!
//! ## Card ask
//!
//! - Asker holds no card of the set, or already holds the card: burn.
//! - Target holds the card: it moves to the asker, who keeps the turn.
//! - Otherwise the turn moves to the target.
//!
//! ## Set declaration
//!
//! Checked in order, any failure burns the whole set:
//! 1. the declarer holds at least one card of the set;
//! 2. claims naming other seats plus the declarer's own cards of the set make six;
//! 3. every claim names the card's true owner.
//!
//! A fully correct declaration drops the set for the declarer's team.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::cards::{set_of, Card, SetId, SET_SIZE};
use crate::core::action::{Action, Claim};
use crate::core::config::Variant;
use crate::core::seat::Seat;
use crate::rules::error::{InvariantViolation, Rejection};
use crate::rules::outcome::{BurnKind, DropKind, Outcome};
use crate::rules::score::ScoreLedger;
use crate::rules::turn::TurnState;
use crate::zones::LocationRegistry;

/// What an accepted action will do. Produced without mutating anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    AskSuccess { card: Card, from: Seat, to: Seat },
    AskFailure { card: Card, asker: Seat, target: Seat },
    Burn { set: SetId, offender: Seat, kind: BurnKind },
    Drop { set: SetId, declarer: Seat, kind: DropKind },
}

/// An applied verdict: the outcome record and the turn that follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: Outcome,
    pub next_turn: TurnState,
}

/// Read-only view used to judge actions.
#[derive(Clone, Copy, Debug)]
pub struct CallResolver<'a> {
    variant: Variant,
    registry: &'a LocationRegistry,
    ledger: &'a ScoreLedger,
}

impl<'a> CallResolver<'a> {
    #[must_use]
    pub fn new(variant: Variant, registry: &'a LocationRegistry, ledger: &'a ScoreLedger) -> Self {
        Self {
            variant,
            registry,
            ledger,
        }
    }

    fn seat_count(&self) -> usize {
        self.registry.seat_count()
    }

    /// Judge `action` taken by whoever holds `turn`.
    pub fn judge(&self, turn: TurnState, action: &Action) -> Result<Verdict, Rejection> {
        if self.ledger.is_game_over() {
            return Err(Rejection::GameOver);
        }
        let actor = turn.acting_seat()?;

        match action {
            Action::CardAsk { target, card } => self.judge_ask(actor, *target, *card),
            Action::SetDeclaration { set, claims } => self.judge_declaration(actor, *set, claims),
        }
    }

    fn check_set(&self, set: SetId) -> Result<(), Rejection> {
        if !self.variant.contains_set(set) {
            return Err(Rejection::SetNotInVariant {
                set,
                variant: self.variant,
            });
        }
        if self.ledger.is_resolved(set) {
            return Err(Rejection::SetResolved(set));
        }
        Ok(())
    }

    fn judge_ask(&self, asker: Seat, target: Seat, card: Card) -> Result<Verdict, Rejection> {
        if !target.exists(self.seat_count()) {
            return Err(Rejection::UnknownSeat(target));
        }
        if self.registry.hand_size(target) == 0 {
            return Err(Rejection::EmptyTarget(target));
        }
        if target.team(self.seat_count()) == asker.team(self.seat_count()) {
            return Err(Rejection::SameTeam { asker, target });
        }

        let set = set_of(card);
        self.check_set(set)?;

        if !self.registry.holds_any_of(asker, set) || self.registry.holds(asker, card) {
            debug!(%asker, %card, "ask without standing in the set");
            return Ok(Verdict::Burn {
                set,
                offender: asker,
                kind: BurnKind::BadAsk,
            });
        }

        if self.registry.holds(target, card) {
            Ok(Verdict::AskSuccess {
                card,
                from: target,
                to: asker,
            })
        } else {
            Ok(Verdict::AskFailure { card, asker, target })
        }
    }

    fn judge_declaration(
        &self,
        declarer: Seat,
        set: SetId,
        claims: &[Claim],
    ) -> Result<Verdict, Rejection> {
        self.check_set(set)?;
        if let Some(claim) = claims.iter().find(|c| !c.seat.exists(self.seat_count())) {
            return Err(Rejection::UnknownSeat(claim.seat));
        }

        let burn = |kind| Verdict::Burn {
            set,
            offender: declarer,
            kind,
        };

        let held = self.registry.count_in_set(declarer, set);
        if held == 0 {
            return Ok(burn(BurnKind::EmptyDeclaration));
        }

        let claimed_elsewhere = claims.iter().filter(|c| c.seat != declarer).count();
        if claimed_elsewhere + held != SET_SIZE {
            debug!(%set, held, claimed_elsewhere, "declaration does not account for six cards");
            return Ok(burn(BurnKind::CountMismatch));
        }

        let mut seen = FxHashSet::default();
        for claim in claims {
            let correct = set.contains(claim.card)
                && seen.insert(claim.card)
                && self.registry.holds(claim.seat, claim.card);
            if !correct {
                debug!(%set, seat = %claim.seat, card = %claim.card, "wrong claim");
                return Ok(burn(BurnKind::WrongClaim));
            }
        }

        let kind = if claimed_elsewhere == 0 {
            DropKind::Solo
        } else {
            DropKind::Collective
        };
        Ok(Verdict::Drop { set, declarer, kind })
    }
}

/// Apply a verdict: mutate the registry, credit the ledger, compute the turn.
pub fn apply(
    verdict: Verdict,
    registry: &mut LocationRegistry,
    ledger: &mut ScoreLedger,
) -> Result<Resolution, InvariantViolation> {
    let seat_count = registry.seat_count();

    let (outcome, next_turn) = match verdict {
        Verdict::AskSuccess { card, from, to } => {
            registry.transfer(card, from, to)?;
            (Outcome::CardAskSuccess { card, from, to }, TurnState::Seat(to))
        }
        Verdict::AskFailure { card, asker, target } => {
            (Outcome::CardAskFailure { card, asker, target }, TurnState::Seat(target))
        }
        Verdict::Burn { set, offender, kind } => {
            let offending_team = offender.team(seat_count);
            let credited_team = offending_team.opponent();
            registry.remove_set(set);
            ledger.credit(credited_team, set);
            (
                Outcome::SetBurn {
                    set,
                    offending_team,
                    credited_team,
                    kind,
                },
                TurnState::TeamPending(credited_team),
            )
        }
        Verdict::Drop { set, declarer, kind } => {
            let dropping_team = declarer.team(seat_count);
            registry.remove_set(set);
            ledger.credit(dropping_team, set);
            let next = if registry.hand_size(declarer) == 0 {
                TurnState::TeamPending(dropping_team)
            } else {
                TurnState::Seat(declarer)
            };
            (
                Outcome::SetDrop {
                    set,
                    dropping_team,
                    kind,
                },
                next,
            )
        }
    };

    Ok(Resolution {
        outcome,
        next_turn: next_turn.skip_exhausted(registry),
    })
}
