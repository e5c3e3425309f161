//! Property tests: random playouts keep cards and scores conserved.
//!
//! Each playout deals a seeded game and then drives it with a stream of random
//! choices. Choices are turned into a mix of plausible moves (asks for cards of
//! a held set, declarations built from true ownership) and deliberately bad ones
//! (asks for own cards, misplaced claims, same-team asks).

mod common;

use common::{cards_held, seat_with_cards};
use proptest::prelude::*;
use rust_literature::cards::{set_of, SET_SIZE};
use rust_literature::{
    Action, Card, Claim, GameSnapshot, LiteratureGame, Outcome, Rejection, Seat, Team, TurnState,
    Variant,
};

fn pick<T: Copy>(items: &[T], choice: u8) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        Some(items[choice as usize % items.len()])
    }
}

/// Build an action for `actor` from three random bytes.
fn choose_action(game: &LiteratureGame, actor: Seat, [kind, a, b]: [u8; 3]) -> Option<Action> {
    let seat_count = game.seat_count();
    let hand = game.hand_of(actor);
    let own = pick(&hand, a)?;
    let set = set_of(own);

    match kind % 8 {
        // Declare the set, claiming every other card at its true owner.
        0 | 1 => {
            let mut claims: Vec<Claim> = set
                .cards()
                .into_iter()
                .filter_map(|c| game.owner_of(c).map(|s| Claim::new(s, c)))
                .filter(|claim| claim.seat != actor)
                .collect();
            if kind % 8 == 1 && !claims.is_empty() {
                // Misplace one claim.
                let i = b as usize % claims.len();
                claims[i].seat = Seat::new((claims[i].seat.0 + 1) % seat_count as u8);
            }
            Some(Action::declare(set, claims))
        }
        // Ask a teammate: always rejected.
        2 => {
            let mates: Vec<Seat> = actor.team(seat_count).seats(seat_count).collect();
            Some(Action::ask(pick(&mates, b)?, own))
        }
        // Ask an opponent for some card of a set we hold.
        _ => {
            let opponents: Vec<Seat> = actor
                .team(seat_count)
                .opponent()
                .seats(seat_count)
                .filter(|&s| game.hand_size(s) > 0)
                .collect();
            let target = pick(&opponents, b)?;
            let wanted: Vec<Card> = set.cards().to_vec();
            Some(Action::ask(target, pick(&wanted, a.wrapping_add(b))?))
        }
    }
}

fn check_invariants(game: &LiteratureGame) -> Result<(), TestCaseError> {
    let variant = game.variant();
    let resolved = game.score_of(Team::A) + game.score_of(Team::B);

    prop_assert_eq!(cards_held(game) + resolved * SET_SIZE, variant.deck_size());
    prop_assert_eq!(resolved + game.unresolved_sets().len(), variant.total_sets());
    prop_assert_eq!(game.is_game_over(), resolved == variant.total_sets());
    prop_assert!(game.result().is_some() == game.is_game_over());

    for set in game.unresolved_sets() {
        prop_assert!(set.cards().iter().all(|&c| game.owner_of(c).is_some()));
    }
    for team in Team::BOTH {
        for set in game.sets_won(team) {
            prop_assert!(set.cards().iter().all(|&c| game.owner_of(c).is_none()));
        }
    }

    if let TurnState::Seat(seat) = game.current_turn() {
        if !game.is_game_over() {
            prop_assert!(game.hand_size(seat) > 0, "{} holds the turn with no cards", seat);
        }
    }
    Ok(())
}

fn variant_strategy() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::SixSeat), Just(Variant::EightSeat)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: cards and sets are conserved through any sequence of moves.
    #[test]
    fn prop_random_playout_conserves_cards(
        variant in variant_strategy(),
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<[u8; 3]>(), 1..400),
    ) {
        let mut game =
            LiteratureGame::deal_hands(variant.seat_count(), variant, None, seed).unwrap();
        check_invariants(&game)?;

        for choice in choices {
            if game.is_game_over() {
                break;
            }

            let actor = match game.current_turn() {
                TurnState::Seat(seat) => seat,
                TurnState::TeamPending(team) => {
                    let seat = match seat_with_cards(&game, team) {
                        Some(seat) => seat,
                        None => {
                            let reason = format!("{} pending with no cards", team);
                            return Err(TestCaseError::fail(reason));
                        }
                    };
                    game.nominate(seat).unwrap();
                    seat
                }
            };

            let Some(action) = choose_action(&game, actor, choice) else {
                continue;
            };

            let before = game.snapshot();
            let scores = (game.score_of(Team::A), game.score_of(Team::B));
            match game.act(action) {
                Ok(outcome) => {
                    let after = (game.score_of(Team::A), game.score_of(Team::B));
                    match outcome {
                        Outcome::SetBurn { credited_team, offending_team, .. } => {
                            prop_assert_ne!(credited_team, offending_team);
                            prop_assert_eq!(actor.team(game.seat_count()), offending_team);
                            prop_assert_eq!(after.0 + after.1, scores.0 + scores.1 + 1);
                        }
                        Outcome::SetDrop { dropping_team, .. } => {
                            prop_assert_eq!(actor.team(game.seat_count()), dropping_team);
                            prop_assert_eq!(after.0 + after.1, scores.0 + scores.1 + 1);
                        }
                        Outcome::CardAskSuccess { .. } | Outcome::CardAskFailure { .. } => {
                            prop_assert_eq!(after, scores);
                        }
                    }
                }
                Err(err) => {
                    prop_assert!(err.rejection().is_some(), "unexpected error: {}", err);
                    prop_assert_eq!(game.snapshot(), before);
                }
            }

            check_invariants(&game)?;
        }
    }

    /// Property: an ask aimed at the asker's own team is always rejected.
    #[test]
    fn prop_same_team_ask_rejected(
        seed in any::<u64>(),
        target in 0u8..3,
        card_choice in any::<u8>(),
    ) {
        let mut game = LiteratureGame::deal_hands(6, Variant::SixSeat, None, seed).unwrap();
        let card = game.hand_of(Seat::new(1))[card_choice as usize % 9];
        let before = game.snapshot();

        let err = game.act(Action::ask(Seat::new(target), card)).unwrap_err();

        prop_assert_eq!(
            err.rejection(),
            Some(&Rejection::SameTeam { asker: Seat::new(0), target: Seat::new(target) })
        );
        prop_assert_eq!(game.snapshot(), before);
    }

    /// Property: a snapshot taken mid-game restores to an identical game.
    #[test]
    fn prop_snapshot_restores_mid_game(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<[u8; 3]>(), 0..60),
    ) {
        let mut game = LiteratureGame::deal_hands(6, Variant::SixSeat, None, seed).unwrap();
        for choice in choices {
            if let TurnState::TeamPending(team) = game.current_turn() {
                match seat_with_cards(&game, team) {
                    Some(seat) => game.nominate(seat).unwrap(),
                    None => break,
                }
            }
            let Some(actor) = game.current_turn().seat() else { break };
            if let Some(action) = choose_action(&game, actor, choice) {
                let _ = game.act(action);
            }
        }

        let bytes = game.snapshot().to_bytes().unwrap();
        let restored = LiteratureGame::restore(GameSnapshot::from_bytes(&bytes).unwrap()).unwrap();
        prop_assert_eq!(restored.snapshot(), game.snapshot());
    }
}
