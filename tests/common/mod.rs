//! Helpers shared by the integration tests.
#![allow(dead_code)]

use rust_literature::cards::full_deck;
use rust_literature::{Card, LiteratureGame, Seat, Team, Variant};
use tracing_subscriber::EnvFilter;

/// Route engine logs to the test output. Set `RUST_LOG=rust_literature=debug`
/// to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn card(notation: &str) -> Card {
    notation.parse().expect("valid card notation")
}

pub fn cards(notations: &[&str]) -> Vec<Card> {
    notations.iter().map(|n| card(n)).collect()
}

/// A full deck reordered so that each listed card is dealt to the given seat.
///
/// Cards are dealt round-robin, so seat `s` receives positions `p` with
/// `p % seat_count == s`. Unlisted cards fill the remaining positions.
pub fn arrange(variant: Variant, placements: &[(&str, u8)]) -> Vec<Card> {
    let seats = variant.seat_count();
    let mut deck = full_deck(variant);
    let mut fixed = vec![false; deck.len()];

    for &(notation, seat) in placements {
        let wanted = card(notation);
        let pos = deck.iter().position(|&c| c == wanted).expect("card in deck");
        let slot = if pos % seats == seat as usize && !fixed[pos] {
            pos
        } else {
            (0..deck.len())
                .find(|&p| p % seats == seat as usize && !fixed[p])
                .expect("seat has a free slot")
        };
        deck.swap(pos, slot);
        fixed[slot] = true;
    }

    deck
}

/// Deal `deck` to the variant's natural table.
pub fn game_with(variant: Variant, deck: Vec<Card>) -> LiteratureGame {
    init_tracing();
    LiteratureGame::deal_hands(variant.seat_count(), variant, Some(deck), 0).expect("valid deck")
}

/// 3v3 game where seat k holds the k-th card of every set.
pub fn canonical_game() -> LiteratureGame {
    game_with(Variant::SixSeat, full_deck(Variant::SixSeat))
}

/// Total cards held across the table.
pub fn cards_held(game: &LiteratureGame) -> usize {
    Seat::all(game.seat_count()).map(|s| game.hand_of(s).len()).sum()
}

/// First seat of `team` that still holds cards.
pub fn seat_with_cards(game: &LiteratureGame, team: Team) -> Option<Seat> {
    team.seats(game.seat_count()).find(|&s| game.hand_size(s) > 0)
}
