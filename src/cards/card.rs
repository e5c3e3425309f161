//! Card identity.
//!
//! A card is either one of the two jokers or a (rank, suit) pair. Every card
//! of the 54-card universe also has a dense `CardId` in `0..54`, assigned by a
//! fixed canonical ordering: the two jokers first, then suit-major, rank-minor.
//! The location registry is an array indexed by `CardId`.
//!
//! ## Notation
//!
//! Cards print and parse in a compact notation: rank then suit letter
//! (`"2C"`, `"10H"`, `"QS"`, `"AD"`), `"JK"` for the joker and `"GU"` for the
//! guarantee.
//!
//! ```
//! use rust_literature::cards::{Card, Rank, Suit};
//!
//! let card: Card = "10H".parse().unwrap();
//! assert_eq!(card, Card::standard(Rank::Ten, Suit::Hearts));
//! assert_eq!(card.to_string(), "10H");
//! assert_eq!(Card::from_id(card.id()), Some(card));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of distinct cards across all variants.
pub const CARD_UNIVERSE: usize = 54;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Card rank, two through ace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ORDERED: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Position in `ORDERED` (two is 0, ace is 12).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 2
    }

    fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        Rank::ORDERED
            .iter()
            .copied()
            .find(|r| r.symbol().eq_ignore_ascii_case(symbol))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The two special cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JokerKind {
    Joker,
    Guarantee,
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    Joker(JokerKind),
    Standard { rank: Rank, suit: Suit },
}

impl Card {
    pub const JOKER: Card = Card::Joker(JokerKind::Joker);
    pub const GUARANTEE: Card = Card::Joker(JokerKind::Guarantee);

    #[must_use]
    pub const fn standard(rank: Rank, suit: Suit) -> Self {
        Card::Standard { rank, suit }
    }

    /// Dense identity of this card.
    #[must_use]
    pub const fn id(self) -> CardId {
        match self {
            Card::Joker(JokerKind::Joker) => CardId(0),
            Card::Joker(JokerKind::Guarantee) => CardId(1),
            Card::Standard { rank, suit } => CardId((2 + suit.index() * 13 + rank.index()) as u8),
        }
    }

    /// Inverse of `id`.
    #[must_use]
    pub const fn from_id(id: CardId) -> Option<Self> {
        match id.0 {
            0 => Some(Card::JOKER),
            1 => Some(Card::GUARANTEE),
            n if (n as usize) < CARD_UNIVERSE => {
                let offset = n as usize - 2;
                Some(Card::Standard {
                    rank: Rank::ORDERED[offset % 13],
                    suit: Suit::ALL[offset / 13],
                })
            }
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Card::Joker(_))
    }

    /// All 54 cards in `CardId` order.
    pub fn universe() -> impl Iterator<Item = Card> {
        (0..CARD_UNIVERSE as u8).filter_map(|i| Card::from_id(CardId(i)))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Joker(JokerKind::Joker) => f.write_str("JK"),
            Card::Joker(JokerKind::Guarantee) => f.write_str("GU"),
            Card::Standard { rank, suit } => write!(f, "{}{}", rank, suit),
        }
    }
}

/// Error parsing card notation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseCardError {
    #[error("empty card notation")]
    Empty,
    #[error("unknown suit in {0:?}")]
    UnknownSuit(String),
    #[error("unknown rank in {0:?}")]
    UnknownRank(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("JK") {
            return Ok(Card::JOKER);
        }
        if s.eq_ignore_ascii_case("GU") {
            return Ok(Card::GUARANTEE);
        }

        let mut chars = s.chars();
        let letter = chars.next_back().ok_or(ParseCardError::Empty)?;
        let suit =
            Suit::from_letter(letter).ok_or_else(|| ParseCardError::UnknownSuit(s.to_string()))?;
        let rank = Rank::from_symbol(chars.as_str())
            .ok_or_else(|| ParseCardError::UnknownRank(s.to_string()))?;

        Ok(Card::standard(rank, suit))
    }
}

/// Dense card identity in `0..CARD_UNIVERSE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
