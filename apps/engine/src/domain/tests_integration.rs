use crate::domain::bidding::{place_bid, select_trump};
use crate::domain::lifecycle::{start_game, start_game_with_seed};
use crate::domain::seating::{add_player, remove_player};
use crate::domain::seats::{Position, Team};
use crate::domain::state::{ActionKind, Game, PendingAction, Phase};
use crate::domain::test_state_helpers::{seated_game, started_game};
use crate::domain::tricks::{legal_moves, play_domino};
use crate::errors::domain::{ConflictKind, DomainError};

#[test]
fn start_requires_four_players_and_waiting() {
    let mut game = Game::new("lobby");
    add_player(&mut game, 1, "a", None, false).unwrap();
    let err = start_game(&mut game).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::NotEnoughPlayers, _)
    ));
    assert_eq!(game.phase(), Phase::Waiting);

    let mut game = started_game(3);
    let err = start_game_with_seed(&mut game, 4).unwrap_err();
    assert!(err.is_phase_violation());
}

#[test]
fn pending_action_follows_phase() {
    let mut game = seated_game();
    assert_eq!(game.pending_action(), None);
    // Make west automated
    game.players.get_mut(&Position::West).unwrap().is_ai = true;
    start_game_with_seed(&mut game, 11).unwrap();

    let dealer = game.dealer().unwrap();
    let opener = crate::domain::next_in_rotation(dealer);
    assert_eq!(
        game.pending_action(),
        Some(PendingAction {
            position: opener,
            kind: ActionKind::Bid,
            is_ai: opener == Position::West,
        })
    );

    // Opener bids, the rest pass
    place_bid(&mut game, opener, 30).unwrap();
    for _ in 0..3 {
        let seat = game.current_turn().unwrap();
        place_bid(&mut game, seat, 0).unwrap();
    }
    let pending = game.pending_action().unwrap();
    assert_eq!(pending.kind, ActionKind::SelectTrump);
    assert_eq!(pending.position, opener);

    select_trump(&mut game, opener, 4).unwrap();
    let pending = game.pending_action().unwrap();
    assert_eq!(pending.kind, ActionKind::Play);
    assert_eq!(pending.position, opener);

    let tile = legal_moves(&game, opener)[0];
    play_domino(&mut game, opener, &tile.id()).unwrap();
    assert_eq!(
        game.current_turn(),
        Some(crate::domain::next_in_rotation(opener))
    );
}

#[test]
fn vacating_a_seat_mid_hand_aborts_the_hand() {
    let mut game = started_game(8);
    game.marks.team2 = 3;
    let opener = game.current_turn().unwrap();
    place_bid(&mut game, opener, 31).unwrap();

    let removed = remove_player(&mut game, Position::South).unwrap();
    assert_eq!(removed.position, Position::South);
    assert_eq!(game.phase(), Phase::Waiting);
    assert_eq!(game.high_bid(), None);
    assert_eq!(game.current_turn(), None);
    assert!(game.tile_census().is_empty());
    assert!(game
        .players()
        .values()
        .all(|p| p.hand().is_empty() && p.current_bid().is_none()));
    // Marks survive
    assert_eq!(game.marks()[Team::Two], 3);

    // Refill and resume
    add_player(&mut game, 50, "replacement", None, false).unwrap();
    start_game_with_seed(&mut game, 9).unwrap();
    assert_eq!(game.phase(), Phase::Bidding);
    assert_eq!(game.hand_no(), 2);
    assert_eq!(game.marks()[Team::Two], 3);
}

#[test]
fn vacating_a_seat_while_waiting_only_frees_it() {
    let mut game = seated_game();
    remove_player(&mut game, Position::North).unwrap();
    assert_eq!(game.phase(), Phase::Waiting);
    assert_eq!(
        add_player(&mut game, 77, "new", None, false).unwrap(),
        Position::North
    );
}

#[test]
fn finished_match_rejects_play_but_allows_room_operations() {
    let mut game = started_game(1);
    game.marks.team1 = 7;
    game.phase = Phase::Finished;

    assert!(start_game(&mut game).unwrap_err().is_phase_violation());
    remove_player(&mut game, Position::East).unwrap();
    assert!(add_player(&mut game, 99, "late", None, false)
        .unwrap_err()
        .is_phase_violation());
    assert!(crate::domain::add_spectator(&mut game, 100, "fan"));
    crate::domain::add_chat_message(&mut game, 100, "fan", "gg", true);
    assert_eq!(game.chat_messages().len(), 1);
    assert_eq!(game.phase(), Phase::Finished);
}

#[test]
fn games_refuse_rules_that_do_not_validate() {
    use crate::config::RulesConfig;
    use crate::error::AppError;

    let err = Game::with_rules(
        "zero",
        RulesConfig {
            winning_marks: 0,
            ..RulesConfig::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Config { .. }));

    let short = RulesConfig {
        winning_marks: 1,
        ..RulesConfig::default()
    };
    let game = Game::with_rules("short", short).unwrap();
    assert_eq!(game.rules().winning_marks, 1);
    assert_eq!(game.match_winner(), None);
}
