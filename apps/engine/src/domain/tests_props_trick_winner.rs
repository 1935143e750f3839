use proptest::prelude::*;

use crate::domain::scoring::{domino_rank, trick_points, trick_winner};
use crate::domain::tricks::lead_suit_for;
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the highest trump wins when any trump is played; otherwise
    /// the highest domino of the lead suit wins.
    #[test]
    fn prop_trick_winner_matches_oracle(
        (_leader, plays, trump) in test_gens::complete_trick(),
    ) {
        let lead = lead_suit_for(plays[0].1, trump);
        let (winner, winning_domino) = trick_winner(&plays, lead, trump).unwrap();

        let best_in = |suit| {
            plays
                .iter()
                .filter_map(|&(p, d)| domino_rank(d, suit).map(|r| (r, p)))
                .max()
        };
        let expected = best_in(trump)
            .or_else(|| best_in(lead))
            .map(|(_, p)| p)
            .unwrap();

        prop_assert_eq!(winner, expected,
            "lead={:?} trump={:?} plays={:?}", lead, trump, plays);
        prop_assert!(plays.contains(&(winner, winning_domino)));
    }

    /// Property: the leader's own domino always belongs to the lead suit, so
    /// the winner is never off-suit non-trump.
    #[test]
    fn prop_winner_is_trump_or_follows_lead(
        (_leader, plays, trump) in test_gens::complete_trick(),
    ) {
        let lead = lead_suit_for(plays[0].1, trump);
        prop_assert!(plays[0].1.belongs_to_suit(lead));
        let (_, winning) = trick_winner(&plays, lead, trump).unwrap();
        prop_assert!(winning.belongs_to_suit(trump) || winning.belongs_to_suit(lead));
    }

    /// Property: a trick is worth at least one point and never more than
    /// one plus the count in the whole set.
    #[test]
    fn prop_trick_points_bounds(
        (_leader, plays, _trump) in test_gens::complete_trick(),
    ) {
        let points = trick_points(&plays);
        let count: u8 = plays.iter().map(|(_, d)| d.count_value()).sum();
        prop_assert_eq!(points, 1 + count);
        prop_assert!((1..=36).contains(&points));
    }
}
