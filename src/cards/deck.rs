//! Deck construction, shuffling, and custom-deck validation.

use rustc_hash::FxHashSet;

use super::card::Card;
use crate::core::config::Variant;
use crate::core::rng::GameRng;
use crate::rules::error::InvariantViolation;

/// The variant's full deck in canonical (set by set) order.
#[must_use]
pub fn full_deck(variant: Variant) -> Vec<Card> {
    variant.cards().collect()
}

/// The variant's full deck, shuffled.
#[must_use]
pub fn shuffled_deck(variant: Variant, rng: &mut GameRng) -> Vec<Card> {
    let mut deck = full_deck(variant);
    rng.shuffle(&mut deck);
    deck
}

/// Check that `deck` is exactly a permutation of the variant's card universe.
///
/// Rejects decks of the wrong length, decks containing a card foreign to the
/// variant (the special set in 4v4), and decks containing a duplicate.
pub fn validate_deck(deck: &[Card], variant: Variant) -> Result<(), InvariantViolation> {
    if deck.len() != variant.deck_size() {
        return Err(InvariantViolation::DeckLength {
            expected: variant.deck_size(),
            actual: deck.len(),
        });
    }

    let mut seen = FxHashSet::default();
    for &card in deck {
        if !variant.contains_card(card) {
            return Err(InvariantViolation::ForeignCard { card, variant });
        }
        if !seen.insert(card) {
            return Err(InvariantViolation::DuplicateCard(card));
        }
    }

    Ok(())
}
