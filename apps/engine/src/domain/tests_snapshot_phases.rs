use crate::domain::bidding::{place_bid, select_trump};
use crate::domain::rules::RECENT_TRICKS;
use crate::domain::seating::{add_player, add_spectator};
use crate::domain::seats::{next_in_rotation, Position};
use crate::domain::snapshot::{state_for_player, state_for_spectator, PhaseSnapshot, Viewer};
use crate::domain::state::Game;
use crate::domain::test_state_helpers::{playing_game, started_game};
use crate::domain::tests_domain_consistency::play_random_match;
use crate::domain::tricks::{legal_moves, play_domino};
use crate::domain::Suit;

const HANDS: [&[&str]; 4] = [
    &["6-6", "6-5", "6-4", "6-3", "6-2", "6-1", "6-0"],
    &["5-5", "5-4", "5-3", "5-2", "5-1", "5-0", "4-4"],
    &["4-3", "4-2", "4-1", "4-0", "3-3", "3-2", "3-1"],
    &["3-0", "2-2", "2-1", "2-0", "1-1", "1-0", "0-0"],
];

#[test]
fn waiting_lists_open_seats() {
    let mut game = Game::new("lobby");
    add_player(&mut game, 1, "a", Some(Position::South), false).unwrap();
    let snap = state_for_spectator(&game);
    match snap.phase {
        PhaseSnapshot::Waiting(w) => {
            assert_eq!(w.open_seats, vec![Position::North, Position::West, Position::East]);
        }
        other => panic!("expected waiting, got {other:?}"),
    }
    assert_eq!(snap.game.seats.len(), 1);
    assert_eq!(snap.game.current_turn, None);
}

#[test]
fn seated_view_redacts_other_hands() {
    let game = started_game(17);
    let snap = state_for_player(&game, Position::West);
    assert_eq!(snap.viewer, Viewer::Seat(Position::West));

    for seat in &snap.game.seats {
        assert_eq!(seat.hand_count, 7);
        if seat.position == Position::West {
            let hand = seat.hand.as_ref().expect("own hand visible");
            let ids: Vec<_> = hand.iter().map(|d| d.id.clone()).collect();
            let expected: Vec<_> = game
                .player(Position::West)
                .unwrap()
                .hand()
                .iter()
                .map(|d| d.id())
                .collect();
            assert_eq!(ids, expected);
        } else {
            assert!(seat.hand.is_none(), "{} leaked", seat.position);
        }
    }

    // Redaction survives serialization
    let json = serde_json::to_value(&snap).unwrap();
    let seats = json["game"]["seats"].as_array().unwrap();
    let hidden = seats.iter().filter(|s| s["hand"].is_null()).count();
    assert_eq!(hidden, 3);
}

#[test]
fn spectator_sees_every_hand() {
    let mut game = started_game(17);
    add_spectator(&mut game, 50, "rail");
    let snap = state_for_spectator(&game);
    assert_eq!(snap.viewer, Viewer::Spectator);
    assert!(snap
        .game
        .seats
        .iter()
        .all(|s| s.hand.as_ref().map(Vec::len) == Some(7)));
    assert_eq!(snap.game.spectators.len(), 1);
}

#[test]
fn legal_bids_only_for_the_bidder() {
    let game = started_game(2);
    let bidder = game.current_turn().unwrap();

    match state_for_player(&game, bidder).phase {
        PhaseSnapshot::Bidding(b) => {
            assert_eq!(b.to_act, Some(bidder));
            assert_eq!(b.min_bid, Some(30));
            assert_eq!(b.max_bid, 42);
            assert_eq!(b.legal_bids.first(), Some(&0));
            assert_eq!(b.legal_bids.len(), 14);
        }
        other => panic!("expected bidding, got {other:?}"),
    }

    match state_for_player(&game, next_in_rotation(bidder)).phase {
        PhaseSnapshot::Bidding(b) => assert!(b.legal_bids.is_empty()),
        other => panic!("expected bidding, got {other:?}"),
    }
}

#[test]
fn min_bid_disappears_after_forty_two() {
    let mut game = started_game(2);
    let bidder = game.current_turn().unwrap();
    place_bid(&mut game, bidder, 42).unwrap();
    match state_for_spectator(&game).phase {
        PhaseSnapshot::Bidding(b) => {
            assert_eq!(b.min_bid, None);
            assert!(b.legal_bids.is_empty());
        }
        other => panic!("expected bidding, got {other:?}"),
    }
    let next = game.current_turn().unwrap();
    match state_for_player(&game, next).phase {
        PhaseSnapshot::Bidding(b) => assert_eq!(b.legal_bids, vec![0]),
        other => panic!("expected bidding, got {other:?}"),
    }
}

#[test]
fn trump_selection_offers_all_suits() {
    let mut game = started_game(9);
    let opener = game.current_turn().unwrap();
    place_bid(&mut game, opener, 34).unwrap();
    for _ in 0..3 {
        let seat = game.current_turn().unwrap();
        place_bid(&mut game, seat, 0).unwrap();
    }
    match state_for_player(&game, opener).phase {
        PhaseSnapshot::TrumpSelection(t) => {
            assert_eq!(t.to_act, Some(opener));
            assert_eq!(t.bid, Some(34));
            assert_eq!(t.allowed_trumps, Suit::ALL.to_vec());
        }
        other => panic!("expected trump selection, got {other:?}"),
    }

    select_trump(&mut game, opener, 6).unwrap();
    let snap = state_for_spectator(&game);
    assert_eq!(snap.game.trump, Some(Suit::Sixes));
}

#[test]
fn playable_reflects_follow_suit() {
    let mut game = playing_game(HANDS, Position::West, 30, Suit::Blanks);
    play_domino(&mut game, Position::West, "5-4").unwrap();

    // South holds no fives, so any tile goes.
    match state_for_player(&game, Position::South).phase {
        PhaseSnapshot::Playing(p) => {
            assert_eq!(p.trick_no, 1);
            assert_eq!(p.leader, Some(Position::West));
            assert_eq!(p.to_act, Some(Position::South));
            assert_eq!(p.lead_suit, Some(Suit::Fives));
            assert_eq!(p.current_trick.len(), 1);
            assert_eq!(p.current_trick[0].1.id, "5-4");
            assert_eq!(p.playable.len(), 7);
        }
        other => panic!("expected playing, got {other:?}"),
    }
    play_domino(&mut game, Position::South, "3-3").unwrap();
    play_domino(&mut game, Position::East, "3-0").unwrap();

    // North's only five is forced.
    match state_for_player(&game, Position::North).phase {
        PhaseSnapshot::Playing(p) => {
            let ids: Vec<_> = p.playable.iter().map(|d| d.id.as_str()).collect();
            assert_eq!(ids, vec!["6-5"]);
        }
        other => panic!("expected playing, got {other:?}"),
    }

    match state_for_player(&game, Position::South).phase {
        PhaseSnapshot::Playing(p) => assert!(p.playable.is_empty()),
        other => panic!("expected playing, got {other:?}"),
    }
}

#[test]
fn recent_tricks_are_capped() {
    let mut game = playing_game(HANDS, Position::North, 30, Suit::Blanks);
    for _ in 0..(4 * 5) {
        let seat = game.current_turn().unwrap();
        let tile = legal_moves(&game, seat)[0];
        play_domino(&mut game, seat, &tile.id()).unwrap();
    }
    assert_eq!(game.trick_history().len(), 5);

    let snap = state_for_spectator(&game);
    assert_eq!(snap.recent_tricks.len(), RECENT_TRICKS);
    assert_eq!(snap.recent_tricks, game.trick_history()[2..].to_vec());
}

#[test]
fn finished_carries_winner_and_last_hand() {
    let (game, _) = play_random_match(64);
    let snap = state_for_player(&game, Position::North);
    match snap.phase {
        PhaseSnapshot::Finished(f) => {
            assert_eq!(f.winner, game.match_winner());
            assert_eq!(f.last_hand.as_ref(), game.hand_history().last());
        }
        other => panic!("expected finished, got {other:?}"),
    }
}

#[test]
fn phase_tag_serializes_adjacently() {
    let game = started_game(1);
    let json = serde_json::to_value(state_for_spectator(&game)).unwrap();
    assert_eq!(json["phase"]["phase"], "bidding");
    assert!(json["phase"]["data"]["min_bid"].is_number());
    assert_eq!(json["viewer"]["kind"], "spectator");
}
