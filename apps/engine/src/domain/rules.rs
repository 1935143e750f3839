use std::ops::RangeInclusive;

pub const PLAYERS: usize = 4;
pub const SET_SIZE: usize = 28;
pub const HAND_SIZE: usize = 7;
pub const TRICKS_PER_HAND: u8 = 7;

/// 7 tricks at one point each plus 35 points of count.
pub const POINTS_PER_HAND: u8 = 42;

pub const PASS: u8 = 0;
pub const MIN_BID: u8 = 30;
pub const MAX_BID: u8 = 42;

pub const WINNING_MARKS: u8 = 7;

/// Bid forced on the dealer when everyone passes.
pub const FORCED_DEALER_BID: u8 = MIN_BID;

pub const CHAT_HISTORY_LIMIT: usize = 100;
pub const CHAT_MAX_CHARS: usize = 200;

/// How many completed tricks a view carries.
pub const RECENT_TRICKS: usize = 3;

pub fn valid_bid_range() -> RangeInclusive<u8> {
    MIN_BID..=MAX_BID
}

/// Lowest bid that would currently be accepted, if any remain.
pub fn min_next_bid(current_high: Option<u8>) -> Option<u8> {
    match current_high {
        None => Some(MIN_BID),
        Some(h) if h >= MAX_BID => None,
        Some(h) => Some(h.max(MIN_BID - 1) + 1),
    }
}
