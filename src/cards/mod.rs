//! Cards, sets, and decks.
//!
//! - `Card`, `Rank`, `Suit`: card identity and notation
//! - `CardId`: dense integer identity used to index the location registry
//! - `SetId`, `set_of`, `cards_of`: the fixed partition of cards into sets
//! - `full_deck`, `shuffled_deck`, `validate_deck`: deck handling

pub mod card;
pub mod deck;
pub mod taxonomy;

pub use card::{Card, CardId, JokerKind, ParseCardError, Rank, Suit, CARD_UNIVERSE};
pub use deck::{full_deck, shuffled_deck, validate_deck};
pub use taxonomy::{cards_of, set_of, SetId, SET_SIZE};
