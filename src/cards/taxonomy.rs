//! Set taxonomy: which set ("pit") every card belongs to.
//!
//! Each suit splits into a low set (2 to 7) and a high set (9, 10, J, Q, K, A).
//! The eights and both jokers form the special set, which only exists in the
//! 6-seat variant. Pure lookup, no state.

use serde::{Deserialize, Serialize};

use super::card::{Card, JokerKind, Rank, Suit};
use crate::core::config::Variant;

/// Cards per set.
pub const SET_SIZE: usize = 6;

const LOW_RANKS: [Rank; SET_SIZE] =
    [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven];
const HIGH_RANKS: [Rank; SET_SIZE] =
    [Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

/// Every set, standard sets first. The 8-seat variant uses the first eight.
const ALL_SETS: [SetId; 9] = [
    SetId::Low(Suit::Clubs),
    SetId::High(Suit::Clubs),
    SetId::Low(Suit::Diamonds),
    SetId::High(Suit::Diamonds),
    SetId::Low(Suit::Hearts),
    SetId::High(Suit::Hearts),
    SetId::Low(Suit::Spades),
    SetId::High(Suit::Spades),
    SetId::Special,
];

/// A set of six cards that is won or lost as a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SetId {
    Low(Suit),
    High(Suit),
    Special,
}

impl SetId {
    /// Dense index in `0..9`, matching the order of `Variant::SixSeat.sets()`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            SetId::Low(suit) => suit.index() * 2,
            SetId::High(suit) => suit.index() * 2 + 1,
            SetId::Special => 8,
        }
    }

    /// The six cards of this set.
    #[must_use]
    pub fn cards(self) -> [Card; SET_SIZE] {
        match self {
            SetId::Low(suit) => LOW_RANKS.map(|rank| Card::standard(rank, suit)),
            SetId::High(suit) => HIGH_RANKS.map(|rank| Card::standard(rank, suit)),
            SetId::Special => [
                Card::JOKER,
                Card::GUARANTEE,
                Card::standard(Rank::Eight, Suit::Clubs),
                Card::standard(Rank::Eight, Suit::Diamonds),
                Card::standard(Rank::Eight, Suit::Hearts),
                Card::standard(Rank::Eight, Suit::Spades),
            ],
        }
    }

    /// Whether `card` belongs to this set.
    #[must_use]
    pub fn contains(self, card: Card) -> bool {
        set_of(card) == self
    }
}

impl std::fmt::Display for SetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetId::Low(suit) => write!(f, "LOW-{}", suit),
            SetId::High(suit) => write!(f, "HIGH-{}", suit),
            SetId::Special => f.write_str("SPECIAL"),
        }
    }
}

/// The set a card belongs to.
///
/// ```
/// use rust_literature::cards::{set_of, Card, Rank, SetId, Suit};
///
/// assert_eq!(set_of(Card::standard(Rank::Seven, Suit::Hearts)), SetId::Low(Suit::Hearts));
/// assert_eq!(set_of(Card::standard(Rank::Nine, Suit::Hearts)), SetId::High(Suit::Hearts));
/// assert_eq!(set_of(Card::standard(Rank::Eight, Suit::Hearts)), SetId::Special);
/// assert_eq!(set_of(Card::JOKER), SetId::Special);
/// ```
#[must_use]
pub const fn set_of(card: Card) -> SetId {
    match card {
        Card::Joker(JokerKind::Joker | JokerKind::Guarantee) => SetId::Special,
        Card::Standard { rank: Rank::Eight, .. } => SetId::Special,
        Card::Standard { rank, suit } => {
            if rank.value() < Rank::Eight.value() {
                SetId::Low(suit)
            } else {
                SetId::High(suit)
            }
        }
    }
}

/// The six cards of `set`.
#[must_use]
pub fn cards_of(set: SetId) -> [Card; SET_SIZE] {
    set.cards()
}

impl Variant {
    /// Sets in play for this variant.
    #[must_use]
    pub fn sets(self) -> &'static [SetId] {
        &ALL_SETS[..self.total_sets()]
    }

    /// Whether `set` is part of this variant.
    #[must_use]
    pub fn contains_set(self, set: SetId) -> bool {
        match self {
            Variant::SixSeat => true,
            Variant::EightSeat => set != SetId::Special,
        }
    }

    /// Whether `card` is part of this variant's deck.
    #[must_use]
    pub fn contains_card(self, card: Card) -> bool {
        self.contains_set(set_of(card))
    }

    /// Every card of this variant's deck, set by set.
    pub fn cards(self) -> impl Iterator<Item = Card> {
        self.sets().iter().flat_map(|set| set.cards())
    }
}
