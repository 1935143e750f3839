use crate::domain::bidding::place_bid;
use crate::domain::record::{export_record, import_record, GameRecord};
use crate::domain::seats::Position;
use crate::domain::state::{Game, Phase};
use crate::domain::test_state_helpers::{seated_game, started_game};
use crate::domain::tests_domain_consistency::play_random_match;
use crate::domain::tricks::{legal_moves, play_domino};
use crate::domain::{add_chat_message, add_spectator};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

fn assert_invalid_record(result: Result<Game, DomainError>) {
    match result {
        Err(DomainError::Validation(ValidationKind::InvalidRecord, _)) => {}
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

/// A game part way through the first trick of a hand.
fn mid_trick_game() -> Game {
    let mut game = started_game(21);
    let opener = game.current_turn().unwrap();
    place_bid(&mut game, opener, 32).unwrap();
    for _ in 0..3 {
        let seat = game.current_turn().unwrap();
        place_bid(&mut game, seat, 0).unwrap();
    }
    crate::domain::select_trump(&mut game, opener, 2).unwrap();
    for _ in 0..2 {
        let seat = game.current_turn().unwrap();
        let tile = legal_moves(&game, seat)[0];
        play_domino(&mut game, seat, &tile.id()).unwrap();
    }
    game
}

#[test]
fn round_trips_every_phase_through_json() {
    let mut waiting = seated_game();
    add_spectator(&mut waiting, 90, "rail");
    add_chat_message(&mut waiting, 1, "north", "hello", false);

    let (finished, _) = play_random_match(77);
    let games = [waiting, started_game(3), mid_trick_game(), finished];

    for game in games {
        let json = export_record(&game).to_json().unwrap();
        let restored = import_record(GameRecord::from_json(&json).unwrap()).unwrap();
        assert_eq!(restored, game, "phase {}", game.phase());
    }
}

#[test]
fn restored_game_continues_identically() {
    let mut original = mid_trick_game();
    let mut restored = import_record(export_record(&original)).unwrap();

    for _ in 0..6 {
        let seat = original.current_turn().unwrap();
        let tile = legal_moves(&original, seat)[0];
        let a = play_domino(&mut original, seat, &tile.id()).unwrap();
        let b = play_domino(&mut restored, seat, &tile.id()).unwrap();
        assert_eq!(a, b);
    }
    assert_eq!(original, restored);
}

#[test]
fn missing_optional_sections_default() {
    let game = seated_game();
    let mut value = serde_json::to_value(export_record(&game)).unwrap();
    let obj = value.as_object_mut().unwrap();
    obj.remove("rules");
    obj.remove("spectators");
    obj.remove("chat");

    let record = GameRecord::from_json(&value.to_string()).unwrap();
    let restored = import_record(record).unwrap();
    assert_eq!(restored.rules().winning_marks, 7);
    assert!(restored.chat_messages().is_empty());
}

#[test]
fn rejects_malformed_json() {
    let err = GameRecord::from_json("{\"game_id\": 5}").unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidRecord, _)
    ));
}

#[test]
fn rejects_duplicate_tile() {
    let game = started_game(12);
    let mut record = export_record(&game);
    let stolen = record.players[0].hand[0];
    record.players[1].hand[0] = stolen;
    assert_invalid_record(import_record(record));
}

#[test]
fn rejects_missing_tile() {
    let game = mid_trick_game();
    let mut record = export_record(&game);
    record.trick.plays.pop();
    assert_invalid_record(import_record(record));
}

#[test]
fn rejects_two_players_in_one_seat() {
    let game = seated_game();
    let mut record = export_record(&game);
    record.players[1].position = Position::North;
    let err = import_record(record).unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ConflictKind::SeatTaken, _)));
}

#[test]
fn rejects_user_seated_twice() {
    let game = seated_game();
    let mut record = export_record(&game);
    record.players[2].user_id = record.players[0].user_id;
    assert_invalid_record(import_record(record));
}

#[test]
fn rejects_finished_mismatch() {
    let game = started_game(4);
    let mut record = export_record(&game);
    record.marks.team1 = 7;
    assert_invalid_record(import_record(record));

    let (finished, _) = play_random_match(8);
    let mut record = export_record(&finished);
    record.phase = Phase::Playing;
    assert_invalid_record(import_record(record));
}

#[test]
fn rejects_transient_phase_and_tiles_while_waiting() {
    let mut record = export_record(&started_game(5));
    record.phase = Phase::Scoring;
    assert_invalid_record(import_record(record));

    let mut record = export_record(&started_game(5));
    record.phase = Phase::Waiting;
    assert_invalid_record(import_record(record));
}

#[test]
fn rejects_playing_without_trump() {
    let mut record = export_record(&mid_trick_game());
    record.trump = None;
    assert_invalid_record(import_record(record));
}

/// A game whose first trick has just been taken.
fn after_first_trick() -> Game {
    let mut game = mid_trick_game();
    while game.trick_history().is_empty() {
        let seat = game.current_turn().unwrap();
        let tile = legal_moves(&game, seat)[0];
        play_domino(&mut game, seat, &tile.id()).unwrap();
    }
    game
}

#[test]
fn later_tricks_round_trip() {
    let game = after_first_trick();
    assert_eq!(game.trick_no(), 2);
    let restored = import_record(export_record(&game)).unwrap();
    assert_eq!(restored, game);
}

#[test]
fn rejects_hand_points_that_disagree_with_captures() {
    let mut record = export_record(&mid_trick_game());
    record.hand_points.team1 = 250;
    record.hand_points.team2 = 250;
    assert_invalid_record(import_record(record));

    let game = after_first_trick();
    let team = crate::domain::team_of(game.trick_history()[0].winner);
    let mut record = export_record(&game);
    record.hand_points[team] += 1;
    assert_invalid_record(import_record(record));
}

#[test]
fn rejects_trick_count_that_disagrees_with_captures() {
    let game = after_first_trick();
    let team = crate::domain::team_of(game.trick_history()[0].winner);

    let mut record = export_record(&game);
    record.tricks_won[team] = 2;
    assert_invalid_record(import_record(record));

    let mut record = export_record(&game);
    record.tricks_won[team] = 200;
    assert_invalid_record(import_record(record));
}

#[test]
fn rejects_trick_number_out_of_step_with_the_hand() {
    for trick_no in [1, 3] {
        let mut record = export_record(&after_first_trick());
        record.trick.trick_no = trick_no;
        assert_invalid_record(import_record(record));
    }
}

#[test]
fn rejects_current_trick_out_of_turn_order() {
    let mut record = export_record(&mid_trick_game());
    let first = record.trick.plays[0].0;
    record.trick.plays[0].0 = record.trick.plays[1].0;
    record.trick.plays[1].0 = first;
    assert_invalid_record(import_record(record));
}

#[test]
fn rejects_hand_sizes_out_of_step_with_the_trick() {
    // Every seat holds six after the first trick; one tile changes hands
    let mut record = export_record(&after_first_trick());
    let tile = record.players[1].hand.pop().unwrap();
    record.players[3].hand.push(tile);
    assert_invalid_record(import_record(record));
}

#[test]
fn rejects_tricks_before_play_starts() {
    let game = after_first_trick();
    let mut record = export_record(&game);
    record.phase = Phase::Bidding;
    record.bidding.current_bidder = Some(Position::North);
    assert_invalid_record(import_record(record));
}

#[test]
fn rejects_invalid_rules() {
    let mut record = export_record(&seated_game());
    record.rules.winning_marks = 0;
    assert_invalid_record(import_record(record));

    let mut record = export_record(&started_game(6));
    record.rules.forced_dealer_bid = 0;
    assert_invalid_record(import_record(record));
}
