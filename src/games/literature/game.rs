//! Literature game instance.

use im::Vector;
use tracing::{debug, info, instrument, warn};

use crate::cards::{shuffled_deck, validate_deck, Card, SetId};
use crate::core::{Action, ActionRecord, Event, GameConfig, GameRng, Seat, Team, Variant};
use crate::rules::{
    apply, CallResolver, GameError, GameResult, Outcome, Rejection, Resolution, ScoreLedger,
    TurnState,
};
use crate::zones::LocationRegistry;

/// A single game of Literature.
///
/// Owns all of its state. `act` and `nominate` are the only operations that
/// change it; everything else is a read.
#[derive(Clone, Debug)]
pub struct LiteratureGame {
    pub(super) config: GameConfig,
    pub(super) registry: LocationRegistry,
    pub(super) turn: TurnState,
    pub(super) ledger: ScoreLedger,
    pub(super) history: Vector<ActionRecord>,
}

/// Builder for creating a `LiteratureGame`.
///
/// ```
/// use rust_literature::core::{Seat, Variant};
/// use rust_literature::games::LiteratureGameBuilder;
///
/// let game = LiteratureGameBuilder::new()
///     .variant(Variant::EightSeat)
///     .build(42)
///     .unwrap();
///
/// assert_eq!(game.hand_of(Seat::new(7)).len(), 6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LiteratureGameBuilder {
    variant: Variant,
    seat_count: Option<usize>,
    deck: Option<Vec<Card>>,
}

impl LiteratureGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Seat count to check against the variant. Defaults to the variant's own.
    pub fn seat_count(mut self, seat_count: usize) -> Self {
        self.seat_count = Some(seat_count);
        self
    }

    /// Deal this exact deck instead of a shuffled one.
    pub fn deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Build the game and deal. `seed` drives the shuffle when no deck was given.
    pub fn build(self, seed: u64) -> Result<LiteratureGame, GameError> {
        let variant = self.variant;
        let seat_count = self.seat_count.unwrap_or(variant.seat_count());
        let config = GameConfig::new(variant).with_seat_count(seat_count);
        config.validate()?;

        let deck = match self.deck {
            Some(deck) => {
                validate_deck(&deck, variant)?;
                deck
            }
            None => {
                let mut rng = GameRng::new(seed);
                debug!(seed = rng.seed(), "shuffling a fresh deck");
                shuffled_deck(variant, &mut rng)
            }
        };

        let registry = LocationRegistry::deal(&deck, config.seat_count)?;
        debug!(%variant, seats = config.seat_count, "hands dealt");

        Ok(LiteratureGame {
            config,
            registry,
            turn: TurnState::default(),
            ledger: ScoreLedger::new(variant),
            history: Vector::new(),
        })
    }
}

impl LiteratureGame {
    /// Deal a new game.
    ///
    /// `seat_count` must match the variant. With `custom_deck` the given deck
    /// is dealt as-is after checking it is exactly the variant's cards;
    /// otherwise a fresh deck is shuffled from `seed`.
    pub fn deal_hands(
        seat_count: usize,
        variant: Variant,
        custom_deck: Option<Vec<Card>>,
        seed: u64,
    ) -> Result<Self, GameError> {
        let mut builder = LiteratureGameBuilder::new().variant(variant).seat_count(seat_count);
        if let Some(deck) = custom_deck {
            builder = builder.deck(deck);
        }
        builder.build(seed)
    }

    /// Submit an action for the seat holding the turn.
    ///
    /// On rejection nothing changes and nothing is recorded.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn act(&mut self, action: Action) -> Result<Outcome, GameError> {
        let resolver = CallResolver::new(self.config.variant, &self.registry, &self.ledger);
        let verdict = match resolver.judge(self.turn, &action) {
            Ok(verdict) => verdict,
            Err(rejection) => {
                warn!(%rejection, "action rejected");
                return Err(rejection.into());
            }
        };
        let actor = self.turn.acting_seat()?;

        let Resolution { outcome, next_turn } =
            apply(verdict, &mut self.registry, &mut self.ledger)?;
        self.turn = next_turn;
        self.record(actor, Event::Resolved { action, outcome });

        match outcome {
            Outcome::SetBurn { .. } | Outcome::SetDrop { .. } => {
                info!(%outcome, next = %self.turn, "set resolved")
            }
            Outcome::CardAskSuccess { .. } | Outcome::CardAskFailure { .. } => {
                debug!(%outcome, "card ask resolved")
            }
        }
        if let Some(result) = self.result() {
            info!(?result, "game over");
        }

        Ok(outcome)
    }

    /// Hand a pending team turn to one of that team's seats.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn nominate(&mut self, seat: Seat) -> Result<(), GameError> {
        let next = if self.is_game_over() {
            Err(Rejection::GameOver)
        } else {
            self.turn.nominate(seat, &self.registry)
        };

        match next {
            Ok(turn) => {
                self.turn = turn;
                self.record(seat, Event::Nominated);
                debug!(%seat, "seat nominated");
                Ok(())
            }
            Err(rejection) => {
                warn!(%rejection, "nomination rejected");
                Err(rejection.into())
            }
        }
    }

    fn record(&mut self, seat: Seat, event: Event) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(sequence, seat, event));
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn seat_count(&self) -> usize {
        self.config.seat_count
    }

    /// Cards held by `seat`, in canonical order. Empty for unknown seats.
    pub fn hand_of(&self, seat: Seat) -> Vec<Card> {
        self.registry.hand(seat)
    }

    /// Number of cards held by `seat`. Zero for unknown seats.
    pub fn hand_size(&self, seat: Seat) -> u32 {
        if seat.exists(self.seat_count()) {
            self.registry.hand_size(seat)
        } else {
            0
        }
    }

    pub fn owner_of(&self, card: Card) -> Option<Seat> {
        self.registry.owner_of(card)
    }

    pub fn score_of(&self, team: Team) -> usize {
        self.ledger.score_of(team)
    }

    /// Sets credited to `team`, in the order they were won.
    pub fn sets_won(&self, team: Team) -> &Vector<SetId> {
        self.ledger.sets_won(team)
    }

    pub fn current_turn(&self) -> TurnState {
        self.turn
    }

    pub fn is_game_over(&self) -> bool {
        self.ledger.is_game_over()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.ledger.result()
    }

    /// Every accepted action and nomination, oldest first.
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Sets not yet credited to either team.
    pub fn unresolved_sets(&self) -> Vec<SetId> {
        self.variant()
            .sets()
            .iter()
            .copied()
            .filter(|&set| !self.ledger.is_resolved(set))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{full_deck, Suit};
    use crate::core::Claim;
    use crate::rules::{BurnKind, InvariantViolation};

    fn c(notation: &str) -> Card {
        notation.parse().unwrap()
    }

    /// Canonical deal: seat k holds the k-th card of every set.
    fn canonical() -> LiteratureGame {
        let deck = full_deck(Variant::SixSeat);
        LiteratureGame::deal_hands(6, Variant::SixSeat, Some(deck), 0).unwrap()
    }

    #[test]
    fn test_game_creation() {
        let game = LiteratureGameBuilder::new().build(42).unwrap();

        assert_eq!(game.seat_count(), 6);
        assert_eq!(game.variant(), Variant::SixSeat);
        for seat in Seat::all(6) {
            assert_eq!(game.hand_of(seat).len(), 9);
            assert_eq!(game.hand_size(seat), 9);
        }
        assert_eq!(game.current_turn(), TurnState::Seat(Seat(0)));
        assert_eq!(game.score_of(Team::A), 0);
        assert_eq!(game.score_of(Team::B), 0);
        assert!(game.history().is_empty());
        assert_eq!(game.unresolved_sets().len(), 9);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_eight_seat_game() {
        let game = LiteratureGame::deal_hands(8, Variant::EightSeat, None, 7).unwrap();

        for seat in Seat::all(8) {
            assert_eq!(game.hand_of(seat).len(), 6);
        }
        assert_eq!(game.owner_of(Card::JOKER), None);
        assert_eq!(game.hand_size(Seat(8)), 0);
    }

    #[test]
    fn test_deal_is_seeded() {
        let a = LiteratureGame::deal_hands(6, Variant::SixSeat, None, 99).unwrap();
        let b = LiteratureGame::deal_hands(6, Variant::SixSeat, None, 99).unwrap();
        let other = LiteratureGame::deal_hands(6, Variant::SixSeat, None, 100).unwrap();

        assert_eq!(a.registry(), b.registry());
        assert_ne!(a.registry(), other.registry());
    }

    #[test]
    fn test_setup_errors() {
        assert_eq!(
            LiteratureGame::deal_hands(6, Variant::EightSeat, None, 1).unwrap_err(),
            GameError::Invariant(InvariantViolation::SeatCount {
                variant: Variant::EightSeat,
                expected: 8,
                actual: 6,
            })
        );

        let short = full_deck(Variant::SixSeat)[..50].to_vec();
        assert_eq!(
            LiteratureGame::deal_hands(6, Variant::SixSeat, Some(short), 1).unwrap_err(),
            GameError::Invariant(InvariantViolation::DeckLength {
                expected: 54,
                actual: 50,
            })
        );
    }

    #[test]
    fn test_ask_success_and_failure() {
        let mut game = canonical();

        let outcome = game.act(Action::ask(Seat(3), c("5C"))).unwrap();
        assert_eq!(
            outcome,
            Outcome::CardAskSuccess {
                card: c("5C"),
                from: Seat(3),
                to: Seat(0),
            }
        );
        assert_eq!(game.owner_of(c("5C")), Some(Seat(0)));
        assert_eq!(game.current_turn(), TurnState::Seat(Seat(0)));

        // 6C sits with seat 4.
        let outcome = game.act(Action::ask(Seat(3), c("6C"))).unwrap();
        assert!(matches!(outcome, Outcome::CardAskFailure { target: Seat(3), .. }));
        assert_eq!(game.current_turn(), TurnState::Seat(Seat(3)));

        assert_eq!(game.history().len(), 2);
        assert_eq!(game.history()[1].seat, Seat(0));
        assert_eq!(game.history()[1].outcome(), Some(&outcome));
    }

    #[test]
    fn test_rejection_changes_nothing() {
        let mut game = canonical();
        let before = game.snapshot();

        let err = game.act(Action::ask(Seat(1), c("3C"))).unwrap_err();

        assert_eq!(
            err.rejection(),
            Some(&Rejection::SameTeam {
                asker: Seat(0),
                target: Seat(1),
            })
        );
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_burn_then_nominate() {
        let mut game = canonical();

        // Seat 0 asks for a card it already holds.
        let outcome = game.act(Action::ask(Seat(3), c("2C"))).unwrap();
        assert_eq!(
            outcome,
            Outcome::SetBurn {
                set: SetId::Low(Suit::Clubs),
                offending_team: Team::A,
                credited_team: Team::B,
                kind: BurnKind::BadAsk,
            }
        );
        assert_eq!(game.current_turn(), TurnState::TeamPending(Team::B));
        assert_eq!(game.score_of(Team::B), 1);
        assert_eq!(game.sets_won(Team::B)[0], SetId::Low(Suit::Clubs));

        let err = game.act(Action::ask(Seat(0), c("9C"))).unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::TeamPending(Team::B)));

        let err = game.nominate(Seat(0)).unwrap_err();
        assert_eq!(
            err.rejection(),
            Some(&Rejection::WrongTeam {
                seat: Seat(0),
                team: Team::B,
            })
        );

        game.nominate(Seat(4)).unwrap();
        assert_eq!(game.current_turn(), TurnState::Seat(Seat(4)));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.history()[1].event, Event::Nominated);

        let err = game.nominate(Seat(5)).unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::NotPending(Seat(4))));
    }

    #[test]
    fn test_play_to_completion() {
        let mut game = canonical();

        for &set in Variant::SixSeat.sets() {
            let actor = match game.current_turn() {
                TurnState::Seat(seat) => seat,
                TurnState::TeamPending(team) => {
                    let seat = team.seats(6).find(|&s| game.hand_size(s) > 0).unwrap();
                    game.nominate(seat).unwrap();
                    seat
                }
            };
            let own = game.hand_of(actor).into_iter().find(|&card| set.contains(card)).unwrap();
            let target =
                actor.team(6).opponent().seats(6).find(|&s| game.hand_size(s) > 0).unwrap();

            let outcome = game.act(Action::ask(target, own)).unwrap();
            assert!(outcome.is_burn());
        }

        assert!(game.is_game_over());
        assert_eq!(game.registry().total_cards(), 0);
        assert_eq!(game.score_of(Team::A) + game.score_of(Team::B), 9);
        assert_eq!(game.result(), Some(GameResult::Winner(Team::B)));

        let err = game.act(Action::declare(SetId::Special, Vec::<Claim>::new())).unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::GameOver));
        let err = game.nominate(Seat(0)).unwrap_err();
        assert_eq!(err.rejection(), Some(&Rejection::GameOver));
    }
}
