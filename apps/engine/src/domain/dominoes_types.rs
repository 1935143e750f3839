//! Core tile types: Suit and Domino

use std::fmt;

use crate::errors::domain::{DomainError, ValidationKind};

/// A pip value, which doubles as a suit once named trump or led.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Suit {
    Blanks = 0,
    Ones = 1,
    Twos = 2,
    Threes = 3,
    Fours = 4,
    Fives = 5,
    Sixes = 6,
}

impl Suit {
    pub const ALL: [Suit; 7] = [
        Suit::Blanks,
        Suit::Ones,
        Suit::Twos,
        Suit::Threes,
        Suit::Fours,
        Suit::Fives,
        Suit::Sixes,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Suit {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Suit::ALL.get(value as usize).copied().ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidTrump,
                format!("Suit must be between 0 and 6, got {value}"),
            )
        })
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// One tile of a double-six set. Always stored with `high >= low`.
///
/// Ord is only for stable hand sorting (high pip, then low pip).
/// Trick resolution goes through `scoring::domino_rank`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Domino {
    high: Suit,
    low: Suit,
}

impl Domino {
    /// Build a tile from two pips in either order.
    pub fn new(a: Suit, b: Suit) -> Self {
        Self {
            high: a.max(b),
            low: a.min(b),
        }
    }

    /// Build a tile from raw pip values, rejecting anything outside 0..=6.
    pub fn from_pips(a: u8, b: u8) -> Result<Self, DomainError> {
        let to_suit = |p: u8| {
            Suit::try_from(p).map_err(|_| {
                DomainError::validation(
                    ValidationKind::ParseDomino,
                    format!("Pip value must be between 0 and 6, got {p}"),
                )
            })
        };
        Ok(Self::new(to_suit(a)?, to_suit(b)?))
    }

    pub const fn high(&self) -> Suit {
        self.high
    }

    pub const fn low(&self) -> Suit {
        self.low
    }

    /// Identity string, e.g. "6-4".
    pub fn id(&self) -> String {
        format!("{}-{}", self.high.value(), self.low.value())
    }

    pub fn is_double(&self) -> bool {
        self.high == self.low
    }

    pub fn pip_total(&self) -> u8 {
        self.high.value() + self.low.value()
    }

    /// Bonus points carried by the five count dominoes.
    pub fn count_value(&self) -> u8 {
        match (self.high.value(), self.low.value()) {
            (5, 0) | (4, 1) | (3, 2) => 5,
            (6, 4) | (5, 5) => 10,
            _ => 0,
        }
    }

    pub fn is_count(&self) -> bool {
        self.count_value() > 0
    }

    /// Suits this tile belongs to; a double belongs to exactly one.
    pub fn suits(&self) -> Vec<Suit> {
        if self.is_double() {
            vec![self.high]
        } else {
            vec![self.high, self.low]
        }
    }

    pub fn belongs_to_suit(&self, suit: Suit) -> bool {
        self.high == suit || self.low == suit
    }

    /// The pip on the other end from `suit`, if the tile belongs to it.
    pub fn other_end(&self, suit: Suit) -> Option<Suit> {
        if self.high == suit {
            Some(self.low)
        } else if self.low == suit {
            Some(self.high)
        } else {
            None
        }
    }
}

impl fmt::Display for Domino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.high, self.low)
    }
}

/// The complete double-six set: 28 unique tiles, ordered 0-0, 1-0, 1-1, ... 6-6.
pub fn full_set() -> Vec<Domino> {
    let mut set = Vec::with_capacity(28);
    for high in Suit::ALL {
        for low in Suit::ALL.into_iter().take(high.value() as usize + 1) {
            set.push(Domino::new(high, low));
        }
    }
    set
}
