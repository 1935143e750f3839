//! Property tests for the auction.

use proptest::prelude::*;

use crate::domain::bidding::{place_bid, BidProgress};
use crate::domain::rules::{MAX_BID, MIN_BID, PASS};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::started_game;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: accepted bids rise strictly and stay in range; rejected
    /// bids change nothing; the auction always closes with a bid winner.
    #[test]
    fn prop_bidding_is_monotonic_and_atomic(
        seed in any::<u64>(),
        attempts in test_gens::bid_attempts(40),
    ) {
        let mut game = started_game(seed);
        let mut accepted: Vec<u8> = Vec::new();
        let mut closed = None;

        for amount in attempts {
            let Some(bidder) = game.current_turn() else { break };
            let before = game.clone();
            match place_bid(&mut game, bidder, amount) {
                Ok(progress) => {
                    if amount != PASS {
                        accepted.push(amount);
                    }
                    if let BidProgress::Closed { .. } = progress {
                        closed = Some(progress);
                        break;
                    }
                }
                Err(_) => {
                    prop_assert_eq!(&game, &before);
                }
            }
        }

        for pair in accepted.windows(2) {
            prop_assert!(pair[0] < pair[1], "bids must rise: {:?}", accepted);
        }
        for bid in &accepted {
            prop_assert!((MIN_BID..=MAX_BID).contains(bid));
        }

        if let Some(BidProgress::Closed { bid_winner, bid, forced }) = closed {
            prop_assert_eq!(game.phase(), Phase::TrumpSelection);
            prop_assert_eq!(game.bid_winner(), Some(bid_winner));
            prop_assert_eq!(game.high_bid(), Some(bid));
            if forced {
                prop_assert!(accepted.is_empty());
                prop_assert_eq!(bid, MIN_BID);
                prop_assert_eq!(Some(bid_winner), game.dealer());
            } else {
                prop_assert_eq!(accepted.last().copied(), Some(bid));
            }
        } else {
            prop_assert_eq!(game.phase(), Phase::Bidding);
        }
    }

    /// Property: four straight passes force the dealer to the minimum bid.
    #[test]
    fn prop_all_pass_forces_dealer(seed in any::<u64>()) {
        let mut game = started_game(seed);
        for _ in 0..4 {
            let bidder = game.current_turn().unwrap();
            place_bid(&mut game, bidder, PASS).unwrap();
        }
        prop_assert_eq!(game.phase(), Phase::TrumpSelection);
        prop_assert_eq!(game.bid_winner(), game.dealer());
        prop_assert_eq!(game.high_bid(), Some(MIN_BID));
    }
}
