//! Seat and team identification, and per-seat data storage.
//!
//! ## Seat
//!
//! Type-safe seat identifier. Literature is played with 6 or 8 seats.
//!
//! ## Team
//!
//! Teams are a pure function of seat index: the first half of the seats
//! form `Team::A`, the second half `Team::B`.
//!
//! ## SeatMap
//!
//! Per-seat data storage backed by `Vec` for O(1) access, indexed by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier.
///
/// Seat indices are 0-based: the first seat is `Seat(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seat(pub u8);

impl Seat {
    /// Create a new seat.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check whether this seat exists at a table of `seat_count` seats.
    #[must_use]
    pub const fn exists(self, seat_count: usize) -> bool {
        self.index() < seat_count
    }

    /// The team this seat plays for at a table of `seat_count` seats.
    ///
    /// ```
    /// use rust_literature::core::{Seat, Team};
    ///
    /// assert_eq!(Seat::new(2).team(6), Team::A);
    /// assert_eq!(Seat::new(3).team(6), Team::B);
    /// assert_eq!(Seat::new(3).team(8), Team::A);
    /// ```
    #[must_use]
    pub const fn team(self, seat_count: usize) -> Team {
        if self.index() < seat_count / 2 {
            Team::A
        } else {
            Team::B
        }
    }

    /// Iterate over all seats at a table of `seat_count` seats.
    pub fn all(seat_count: usize) -> impl Iterator<Item = Seat> {
        (0..seat_count as u8).map(Seat)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// One of the two fixed teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub const BOTH: [Team; 2] = [Team::A, Team::B];

    /// The other team.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    /// Index into two-element per-team arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Team::A => 0,
            Team::B => 1,
        }
    }

    /// Iterate over the seats belonging to this team.
    pub fn seats(self, seat_count: usize) -> impl Iterator<Item = Seat> {
        Seat::all(seat_count).filter(move |s| s.team(seat_count) == self)
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::A => f.write_str("Team A"),
            Team::B => f.write_str("Team B"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per seat.
///
/// ## Example
///
/// ```
/// use rust_literature::core::{Seat, SeatMap};
///
/// let mut counts: SeatMap<u32> = SeatMap::with_value(6, 9);
/// counts[Seat::new(1)] -= 1;
/// assert_eq!(counts[Seat::new(1)], 8);
/// assert_eq!(counts[Seat::new(0)], 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(seat_count: usize, factory: impl Fn(Seat) -> T) -> Self {
        assert!(seat_count > 0, "Must have at least 1 seat");
        assert!(seat_count <= 255, "At most 255 seats supported");

        let data = (0..seat_count as u8).map(|i| factory(Seat(i))).collect();

        Self { data }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(seat_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(seat_count, |_| value.clone())
    }

    /// Create a new SeatMap with default values.
    pub fn with_default(seat_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(seat_count, |_| T::default())
    }

    /// Get the number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
