//! Plays complete matches with four automated seats.

use std::time::Instant;

use serde::Serialize;
use texas42_engine::ai::create_ai;
use texas42_engine::domain::{derive_seat_seed, start_game_with_seed, ByTeam, Game, Position};
use texas42_engine::services::automation::{drive_automated_turns, fill_with_bots, AiRoster};
use texas42_engine::{AppError, RulesConfig};

/// One JSON line per match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    pub match_no: u32,
    pub seed: u64,
    /// Winning team number, 1 or 2.
    pub winner: Option<u8>,
    pub marks: ByTeam<u8>,
    pub hands_played: usize,
    /// Hands where the bidding team fell short.
    pub sets: ByTeam<u32>,
    /// Hands won by a bid of 42.
    pub forty_twos: usize,
    pub actions: usize,
    /// AI name per seat in rotation order.
    pub seats: [String; 4],
    pub duration_ms: f64,
}

/// AI names per seat, in rotation order.
pub struct Simulator {
    seat_ais: [String; 4],
    rules: RulesConfig,
}

impl Simulator {
    pub fn new(seat_ais: [String; 4], rules: RulesConfig) -> Self {
        Self { seat_ais, rules }
    }

    fn roster(&self, seed: u64) -> Result<AiRoster, AppError> {
        let mut roster = AiRoster::default();
        for (position, name) in Position::ROTATION.into_iter().zip(&self.seat_ais) {
            let ai = create_ai(name, Some(derive_seat_seed(seed, position)))
                .ok_or_else(|| AppError::config(format!("Unknown AI type: {name}")))?;
            roster.set_seat(position, ai);
        }
        Ok(roster)
    }

    pub fn run_match(&self, match_no: u32, seed: u64) -> Result<MatchSummary, AppError> {
        let started = Instant::now();

        let mut game = Game::with_rules(format!("sim-{match_no}"), self.rules)?;
        fill_with_bots(&mut game)?;
        start_game_with_seed(&mut game, seed)?;
        let moves = drive_automated_turns(&mut game, &self.roster(seed)?)?;

        Ok(summarize(
            &game,
            match_no,
            seed,
            moves.len(),
            self.seat_ais.clone(),
            started.elapsed().as_secs_f64() * 1000.0,
        ))
    }
}

fn summarize(
    game: &Game,
    match_no: u32,
    seed: u64,
    actions: usize,
    seats: [String; 4],
    duration_ms: f64,
) -> MatchSummary {
    let mut sets = ByTeam::<u32>::default();
    let mut forty_twos = 0;
    for hand in game.hand_history() {
        let bid_team = texas42_engine::domain::team_of(hand.bid_winner);
        if !hand.made_bid {
            sets[bid_team] += 1;
        } else if hand.bid == 42 {
            forty_twos += 1;
        }
    }

    MatchSummary {
        match_no,
        seed,
        winner: game.match_winner().map(|t| t.number()),
        marks: game.marks().clone(),
        hands_played: game.hand_history().len(),
        sets,
        forty_twos,
        actions,
        seats,
        duration_ms,
    }
}
