//! Seat positions, partnerships, and rotation math.
//!
//! Everything that asks "who acts next" or "which side is this" goes through
//! `next_in_rotation` and `team_of`, so there is one source of truth for turn order.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::domain::{DomainError, ValidationKind};

/// The four seats. Declaration order is the rotation order, so sorted
/// collections of positions iterate in turn order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    North,
    West,
    South,
    East,
}

impl Position {
    /// Rotation order; turns advance left to right and wrap.
    pub const ROTATION: [Position; 4] = [
        Position::North,
        Position::West,
        Position::South,
        Position::East,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Position::North => "north",
            Position::West => "west",
            Position::South => "south",
            Position::East => "east",
        }
    }

    /// Index into `ROTATION`.
    pub const fn index(self) -> usize {
        match self {
            Position::North => 0,
            Position::West => 1,
            Position::South => 2,
            Position::East => 3,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" => Ok(Position::North),
            "west" => Ok(Position::West),
            "south" => Ok(Position::South),
            "east" => Ok(Position::East),
            _ => Err(DomainError::validation(
                ValidationKind::ParsePosition,
                format!("Unknown position: {s}"),
            )),
        }
    }
}

/// Returns the seat `steps` places after `p` in rotation order.
#[inline]
pub fn seat_offset(p: Position, steps: usize) -> Position {
    Position::ROTATION[(p.index() + steps) % 4]
}

/// Next seat in rotation order (north → west → south → east → north).
#[inline]
pub fn next_in_rotation(p: Position) -> Position {
    seat_offset(p, 1)
}

/// North/South are team 1, East/West are team 2.
#[inline]
pub fn team_of(p: Position) -> Team {
    match p {
        Position::North | Position::South => Team::One,
        Position::East | Position::West => Team::Two,
    }
}

#[inline]
pub fn partner_of(p: Position) -> Position {
    seat_offset(p, 2)
}

/// First bidder of a hand: the seat after the dealer.
#[inline]
pub fn first_bidder(dealer: Position) -> Position {
    next_in_rotation(dealer)
}

/// Expected actor during a trick, given the leader and plays made so far.
#[inline]
pub fn expected_actor(leader: Position, play_count: usize) -> Position {
    seat_offset(leader, play_count)
}

/// A partnership. Serialized as its number (1 or 2).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub const fn number(self) -> u8 {
        match self {
            Team::One => 1,
            Team::Two => 2,
        }
    }

    pub const fn opponent(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team {}", self.number())
    }
}

impl Serialize for Team {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for Team {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match u8::deserialize(deserializer)? {
            1 => Ok(Team::One),
            2 => Ok(Team::Two),
            other => Err(serde::de::Error::custom(format!("Invalid team: {other}"))),
        }
    }
}

/// One value per partnership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByTeam<T> {
    pub team1: T,
    pub team2: T,
}

impl<T> ByTeam<T> {
    pub fn new(team1: T, team2: T) -> Self {
        Self { team1, team2 }
    }
}

impl<T> Index<Team> for ByTeam<T> {
    type Output = T;

    fn index(&self, team: Team) -> &T {
        match team {
            Team::One => &self.team1,
            Team::Two => &self.team2,
        }
    }
}

impl<T> IndexMut<Team> for ByTeam<T> {
    fn index_mut(&mut self, team: Team) -> &mut T {
        match team {
            Team::One => &mut self.team1,
            Team::Two => &mut self.team2,
        }
    }
}
