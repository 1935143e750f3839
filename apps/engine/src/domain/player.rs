//! Per-seat state: identity, hand, and bidding status.

use serde::{Deserialize, Serialize};

use crate::domain::seats::{partner_of, team_of, Position, Team};
use crate::domain::{Domino, Suit};

pub type UserId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub user_id: UserId,
    pub username: String,
    pub position: Position,
    pub is_ai: bool,
    pub(crate) hand: Vec<Domino>,
    pub(crate) current_bid: Option<u8>,
    pub(crate) has_passed: bool,
}

impl Player {
    pub fn new(user_id: UserId, username: impl Into<String>, position: Position, is_ai: bool) -> Self {
        Self {
            user_id,
            username: username.into(),
            position,
            is_ai,
            hand: Vec::with_capacity(7),
            current_bid: None,
            has_passed: false,
        }
    }

    pub fn team(&self) -> Team {
        team_of(self.position)
    }

    pub fn partner(&self) -> Position {
        partner_of(self.position)
    }

    pub fn hand(&self) -> &[Domino] {
        &self.hand
    }

    pub fn hand_count(&self) -> usize {
        self.hand.len()
    }

    pub fn current_bid(&self) -> Option<u8> {
        self.current_bid
    }

    pub fn has_passed(&self) -> bool {
        self.has_passed
    }

    pub fn add_domino(&mut self, domino: Domino) {
        self.hand.push(domino);
    }

    /// Removes one copy of `domino`. Returns `None`, leaving the hand as is,
    /// when the tile is not held.
    pub fn remove_domino(&mut self, domino: Domino) -> Option<Domino> {
        let pos = self.hand.iter().position(|&d| d == domino)?;
        Some(self.hand.remove(pos))
    }

    pub fn has_domino(&self, domino_id: &str) -> bool {
        self.get_domino(domino_id).is_some()
    }

    /// Look up a held tile by id; either orientation of the id matches.
    pub fn get_domino(&self, domino_id: &str) -> Option<Domino> {
        let wanted = domino_id.parse::<Domino>().ok()?;
        self.hand.iter().copied().find(|&d| d == wanted)
    }

    /// Dominoes this player may legally play.
    ///
    /// Leading (no lead suit yet) allows anything. Otherwise the player must
    /// follow the lead suit when able. Trump does not change who must follow.
    pub fn playable_dominoes(&self, lead_suit: Option<Suit>, _trump: Option<Suit>) -> Vec<Domino> {
        let Some(lead) = lead_suit else {
            return self.hand.clone();
        };
        let following: Vec<Domino> = self
            .hand
            .iter()
            .copied()
            .filter(|d| d.belongs_to_suit(lead))
            .collect();
        if following.is_empty() {
            self.hand.clone()
        } else {
            following
        }
    }

    pub fn can_follow_suit(&self, lead_suit: Suit) -> bool {
        self.hand.iter().any(|d| d.belongs_to_suit(lead_suit))
    }

    /// Number of held tiles in each suit, indexed by pip value. Doubles count once.
    pub fn suit_counts(&self) -> [u8; 7] {
        suit_counts(&self.hand)
    }

    /// Longest suit in hand; ties go to the higher suit.
    pub fn dominant_suit(&self) -> Option<(Suit, u8)> {
        dominant_suit(&self.hand)
    }

    /// Rough strength of the hand if `suit` were trump.
    ///
    /// The suit's double is worth 7, other trumps 2, and count tiles in the
    /// suit add one per five points they carry.
    pub fn hand_strength(&self, suit: Suit) -> u32 {
        self.hand
            .iter()
            .filter(|d| d.belongs_to_suit(suit))
            .map(|d| {
                let base = if d.is_double() && d.high() == suit { 7 } else { 2 };
                base + u32::from(d.count_value() / 5)
            })
            .sum()
    }

    /// Clears hand and bidding status ahead of a new deal.
    pub fn reset_for_new_hand(&mut self) {
        self.hand.clear();
        self.current_bid = None;
        self.has_passed = false;
    }
}

pub fn suit_counts(tiles: &[Domino]) -> [u8; 7] {
    let mut counts = [0u8; 7];
    for d in tiles {
        for s in d.suits() {
            counts[s.value() as usize] += 1;
        }
    }
    counts
}

pub fn dominant_suit(tiles: &[Domino]) -> Option<(Suit, u8)> {
    if tiles.is_empty() {
        return None;
    }
    let counts = suit_counts(tiles);
    Suit::ALL
        .into_iter()
        .map(|s| (s, counts[s.value() as usize]))
        .max_by_key(|&(s, n)| (n, s))
}
