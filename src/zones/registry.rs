//! Card location registry: the single source of truth for who holds what.
//!
//! Ownership is stored as an array indexed by `CardId`. A card whose set has
//! been resolved has no owner. Per-seat hand sizes are maintained alongside so
//! that "is this hand empty" is O(1).
//!
//! The registry only guarantees bookkeeping consistency; it never judges
//! whether a game action is legal.

use serde::{Deserialize, Serialize};

use crate::cards::{set_of, Card, CardId, SetId, CARD_UNIVERSE};
use crate::core::config::Variant;
use crate::core::seat::{Seat, SeatMap, Team};
use crate::rules::error::InvariantViolation;

/// Card ownership across all seats.
///
/// ## Usage
///
/// ```
/// use rust_literature::cards::{full_deck, Card};
/// use rust_literature::core::{Seat, Variant};
/// use rust_literature::zones::LocationRegistry;
///
/// let deck = full_deck(Variant::SixSeat);
/// let mut registry = LocationRegistry::deal(&deck, 6).unwrap();
///
/// // Round-robin deal: card i goes to seat i % 6.
/// assert_eq!(registry.owner_of(deck[7]), Some(Seat::new(1)));
///
/// registry.transfer(deck[7], Seat::new(1), Seat::new(4)).unwrap();
/// assert_eq!(registry.owner_of(deck[7]), Some(Seat::new(4)));
/// assert_eq!(registry.hand_size(Seat::new(4)), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRegistry {
    /// Owner per card, indexed by `CardId`.
    owners: Vec<Option<Seat>>,

    /// Cards held per seat.
    hand_sizes: SeatMap<u32>,
}

impl LocationRegistry {
    /// Create a registry where nobody holds anything.
    #[must_use]
    pub fn new(seat_count: usize) -> Self {
        Self {
            owners: vec![None; CARD_UNIVERSE],
            hand_sizes: SeatMap::with_value(seat_count, 0),
        }
    }

    /// Deal `deck` round-robin: card `i` goes to seat `i % seat_count`.
    ///
    /// Fails if a card appears twice, or if `seat_count` is zero or does not
    /// fit a `Seat`.
    pub fn deal(deck: &[Card], seat_count: usize) -> Result<Self, InvariantViolation> {
        if seat_count == 0 || seat_count > usize::from(u8::MAX) {
            return Err(InvariantViolation::UnsupportedSeatCount(seat_count));
        }

        let mut registry = Self::new(seat_count);

        for (i, &card) in deck.iter().enumerate() {
            let seat = Seat::new((i % seat_count) as u8);
            let slot = &mut registry.owners[card.id().index()];
            if slot.is_some() {
                return Err(InvariantViolation::DuplicateCard(card));
            }
            *slot = Some(seat);
            registry.hand_sizes[seat] += 1;
        }

        Ok(registry)
    }

    /// Number of seats tracked.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.hand_sizes.seat_count()
    }

    /// Who holds `card`, or `None` once its set has been resolved.
    #[must_use]
    pub fn owner_of(&self, card: Card) -> Option<Seat> {
        self.owners[card.id().index()]
    }

    /// Whether `seat` holds `card`.
    #[must_use]
    pub fn holds(&self, seat: Seat, card: Card) -> bool {
        self.owner_of(card) == Some(seat)
    }

    /// Move `card` from `from` to `to`.
    ///
    /// Fails without mutating if `from` is not the current owner or `to` is
    /// not at the table.
    pub fn transfer(&mut self, card: Card, from: Seat, to: Seat) -> Result<(), InvariantViolation> {
        if !to.exists(self.seat_count()) {
            return Err(InvariantViolation::UnknownSeat(to));
        }

        let slot = &mut self.owners[card.id().index()];
        if *slot != Some(from) {
            return Err(InvariantViolation::NotOwner {
                card,
                expected: from,
                actual: *slot,
            });
        }

        *slot = Some(to);
        self.hand_sizes[from] -= 1;
        self.hand_sizes[to] += 1;
        Ok(())
    }

    /// Remove every card of `set` from every hand.
    ///
    /// Returns how many cards were removed.
    pub fn remove_set(&mut self, set: SetId) -> usize {
        let mut removed = 0;
        for card in set.cards() {
            if let Some(seat) = self.owners[card.id().index()].take() {
                self.hand_sizes[seat] -= 1;
                removed += 1;
            }
        }
        removed
    }

    /// The cards `seat` holds, in `CardId` order.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> Vec<Card> {
        self.owners
            .iter()
            .enumerate()
            .filter(|(_, owner)| **owner == Some(seat))
            .filter_map(|(i, _)| Card::from_id(CardId(i as u8)))
            .collect()
    }

    /// Number of cards `seat` holds.
    #[must_use]
    pub fn hand_size(&self, seat: Seat) -> u32 {
        self.hand_sizes[seat]
    }

    /// Number of cards of `set` that `seat` holds.
    #[must_use]
    pub fn count_in_set(&self, seat: Seat, set: SetId) -> usize {
        set.cards().iter().filter(|&&c| self.holds(seat, c)).count()
    }

    /// Whether `seat` holds at least one card of `set`.
    #[must_use]
    pub fn holds_any_of(&self, seat: Seat, set: SetId) -> bool {
        set.cards().iter().any(|&c| self.holds(seat, c))
    }

    /// Whether any card of `set` is still held by someone.
    #[must_use]
    pub fn is_set_in_play(&self, set: SetId) -> bool {
        set.cards().iter().any(|&c| self.owner_of(c).is_some())
    }

    /// Whether every seat of `team` has an empty hand.
    #[must_use]
    pub fn is_team_exhausted(&self, team: Team) -> bool {
        team.seats(self.seat_count()).all(|s| self.hand_size(s) == 0)
    }

    /// Total cards held across all seats.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.owners.iter().filter(|o| o.is_some()).count()
    }

    /// Check that exactly the cards of `in_play` sets are owned, by existing
    /// seats, and that the cached hand sizes agree.
    pub fn verify(&self, variant: Variant, in_play: &[SetId]) -> Result<(), InvariantViolation> {
        if self.owners.len() != CARD_UNIVERSE {
            return Err(InvariantViolation::CorruptSnapshot(format!(
                "registry tracks {} cards",
                self.owners.len()
            )));
        }

        let mut counted = SeatMap::with_value(self.seat_count(), 0u32);
        for card in Card::universe() {
            let expected_in_play = variant.contains_card(card) && in_play.contains(&set_of(card));
            match self.owner_of(card) {
                Some(seat) if !seat.exists(self.seat_count()) => {
                    return Err(InvariantViolation::CorruptSnapshot(format!(
                        "{} held by nonexistent {}",
                        card, seat
                    )));
                }
                Some(seat) if expected_in_play => counted[seat] += 1,
                None if !expected_in_play => {}
                owner => {
                    return Err(InvariantViolation::CorruptSnapshot(format!(
                        "{} has owner {:?}, in play: {}",
                        card, owner, expected_in_play
                    )));
                }
            }
        }

        if counted != self.hand_sizes {
            return Err(InvariantViolation::CorruptSnapshot(
                "hand sizes disagree with card owners".to_string(),
            ));
        }

        Ok(())
    }
}
