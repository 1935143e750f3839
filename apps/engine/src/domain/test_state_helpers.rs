//! Test-only builders for games in specific phases.

use crate::domain::dominoes_parsing::try_parse_dominoes;
use crate::domain::lifecycle::start_game_with_seed;
use crate::domain::seating::add_player;
use crate::domain::seats::{first_bidder, Position};
use crate::domain::state::{Game, Phase};
use crate::domain::Suit;

/// Four human players, users 1..=4 seated north, west, south, east.
pub fn seated_game() -> Game {
    let mut game = Game::new("test-game");
    for (i, position) in Position::ROTATION.into_iter().enumerate() {
        add_player(&mut game, i as i64 + 1, position.as_str(), Some(position), false)
            .expect("seat is free");
    }
    game
}

/// A seated game started with `seed`, now in bidding.
pub fn started_game(seed: u64) -> Game {
    let mut game = seated_game();
    start_game_with_seed(&mut game, seed).expect("four players are seated");
    game
}

/// A game in bidding with the given hands (rotation order) and dealer.
pub fn bidding_game(hands: [&[&str]; 4], dealer: Position) -> Game {
    let mut game = seated_game();
    for (position, tiles) in Position::ROTATION.into_iter().zip(hands) {
        let player = game.players.get_mut(&position).expect("seated");
        player.hand = try_parse_dominoes(tiles).expect("hardcoded valid dominoes");
    }
    game.seed = Some(0);
    game.hand_no = 1;
    game.dealer = Some(dealer);
    game.bidding.current_bidder = Some(first_bidder(dealer));
    game.phase = Phase::Bidding;
    game
}

/// A game at the start of trick play: `leader` won the bid at `bid` and named `trump`.
pub fn playing_game(hands: [&[&str]; 4], leader: Position, bid: u8, trump: Suit) -> Game {
    let mut game = bidding_game(hands, leader);
    game.bidding.current_bidder = None;
    game.bidding.high_bid = Some(bid);
    game.bidding.high_bidder = Some(leader);
    game.bidding.bid_winner = Some(leader);
    game.trump = Some(trump);
    game.trick.leader = Some(leader);
    game.trick.trick_no = 1;
    game.phase = Phase::Playing;
    game
}
