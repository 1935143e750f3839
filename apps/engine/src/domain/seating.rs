//! Seats and spectators.

use tracing::{debug, info};

use crate::domain::player::{Player, UserId};
use crate::domain::seats::Position;
use crate::domain::state::{Game, Phase, Spectator};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

/// Seat a player at `preferred` if it is free, otherwise at the first free
/// seat in rotation order.
pub fn add_player(
    game: &mut Game,
    user_id: UserId,
    username: impl Into<String>,
    preferred: Option<Position>,
    is_ai: bool,
) -> Result<Position, DomainError> {
    if game.phase == Phase::Finished {
        return Err(DomainError::phase("Cannot join a finished match"));
    }
    if game.is_full() {
        return Err(DomainError::conflict(ConflictKind::GameFull, "Game is full"));
    }
    if let Some(seated) = game.position_of(user_id) {
        return Err(DomainError::conflict(
            ConflictKind::AlreadySeated,
            format!("User {user_id} is already seated at {seated}"),
        ));
    }

    let free = |p: &Position| !game.players.contains_key(p);
    let position = preferred
        .filter(free)
        .or_else(|| Position::ROTATION.into_iter().find(free))
        .ok_or_else(|| DomainError::conflict(ConflictKind::GameFull, "No positions available"))?;

    let player = Player::new(user_id, username, position, is_ai);
    info!(game_id = %game.id, user_id, %position, is_ai, "Player seated");
    game.players.insert(position, player);
    Ok(position)
}

/// Vacate a seat. Vacating mid-hand aborts the hand: per-hand state and all
/// hands are cleared and the match returns to `Waiting`, keeping marks and
/// history.
pub fn remove_player(game: &mut Game, position: Position) -> Result<Player, DomainError> {
    let removed = game.players.remove(&position).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("No player seated at {position}"))
    })?;

    info!(game_id = %game.id, user_id = removed.user_id, %position, "Player left");

    if game.phase.hand_in_progress() {
        abort_hand(game);
    }
    Ok(removed)
}

fn abort_hand(game: &mut Game) {
    info!(
        game_id = %game.id,
        hand_no = game.hand_no,
        phase = %game.phase,
        "Hand aborted; seat vacated"
    );
    game.clear_hand_state();
    for player in game.players.values_mut() {
        player.reset_for_new_hand();
    }
    game.phase = Phase::Waiting;
}

/// Returns `false` when the user is already watching.
pub fn add_spectator(game: &mut Game, user_id: UserId, username: impl Into<String>) -> bool {
    if game.spectators.iter().any(|s| s.user_id == user_id) {
        return false;
    }
    let spectator = Spectator {
        user_id,
        username: username.into(),
    };
    debug!(game_id = %game.id, user_id, "Spectator joined");
    game.spectators.push(spectator);
    true
}

pub fn remove_spectator(game: &mut Game, user_id: UserId) -> Result<Spectator, DomainError> {
    let idx = game
        .spectators
        .iter()
        .position(|s| s.user_id == user_id)
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Spectator,
                format!("User {user_id} is not spectating"),
            )
        })?;
    debug!(game_id = %game.id, user_id, "Spectator left");
    Ok(game.spectators.remove(idx))
}
