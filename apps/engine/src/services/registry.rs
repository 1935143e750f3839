//! Room registry: live matches keyed by id.
//!
//! Owned by the host. Each room guards its `Game` with its own mutex, so
//! operations on different matches never contend.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, info};

use crate::config::RulesConfig;
use crate::domain::{Game, Phase};
use crate::error::AppError;
use crate::errors::ErrorCode;

/// One live match plus the time it was last locked.
pub struct GameRoom {
    game: Mutex<Game>,
    last_touched: Mutex<Instant>,
}

impl GameRoom {
    fn new(game: Game) -> Self {
        Self {
            game: Mutex::new(game),
            last_touched: Mutex::new(Instant::now()),
        }
    }

    /// Lock the match for reading or mutation; refreshes the idle clock.
    pub fn lock(&self) -> MutexGuard<'_, Game> {
        *self.last_touched.lock() = Instant::now();
        self.game.lock()
    }

    pub fn idle_for(&self) -> Duration {
        self.last_touched.lock().elapsed()
    }

    fn is_finished(&self) -> bool {
        self.game.lock().phase() == Phase::Finished
    }
}

/// Concurrent map from match id to room.
pub struct GameRegistry {
    rooms: DashMap<String, Arc<GameRoom>>,
    rules: RulesConfig,
}

impl GameRegistry {
    /// New rooms are created with `rules`, validated here once.
    pub fn new(rules: RulesConfig) -> Result<Self, AppError> {
        rules.validate()?;
        Ok(Self::with_valid_rules(rules))
    }

    fn with_valid_rules(rules: RulesConfig) -> Self {
        Self {
            rooms: DashMap::new(),
            rules,
        }
    }

    /// The room for `game_id`, creating an empty match on first join.
    pub fn get_or_create(&self, game_id: &str) -> Arc<GameRoom> {
        if let Some(room) = self.rooms.get(game_id) {
            return room.value().clone();
        }
        self.rooms
            .entry(game_id.to_string())
            .or_insert_with(|| {
                info!(game_id, "Room created");
                Arc::new(GameRoom::new(Game::with_valid_rules(game_id, self.rules)))
            })
            .value()
            .clone()
    }

    pub fn get(&self, game_id: &str) -> Result<Arc<GameRoom>, AppError> {
        self.rooms
            .get(game_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(ErrorCode::GameNotFound, format!("No room {game_id}")))
    }

    /// Adopt an existing match (e.g. one restored from a record). Replaces
    /// any room already registered under its id.
    pub fn insert(&self, game: Game) -> Arc<GameRoom> {
        let room = Arc::new(GameRoom::new(game));
        let id = room.game.lock().id().to_string();
        self.rooms.insert(id, room.clone());
        room
    }

    pub fn remove(&self, game_id: &str) -> Option<Arc<GameRoom>> {
        let removed = self.rooms.remove(game_id).map(|(_, room)| room);
        if removed.is_some() {
            debug!(game_id, "Room removed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.rooms.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Drop every room whose match has finished. Returns how many went.
    pub fn evict_finished(&self) -> usize {
        self.evict_where(|room| room.is_finished(), "finished")
    }

    /// Drop rooms nobody has locked for longer than `max_idle`.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        self.evict_where(|room| room.idle_for() > max_idle, "idle")
    }

    // Candidates are collected first so no room mutex is taken under a shard lock.
    // A room replaced under the same id after that snapshot is left alone.
    fn evict_where<F>(&self, predicate: F, reason: &'static str) -> usize
    where
        F: Fn(&GameRoom) -> bool,
    {
        let rooms: Vec<(String, Arc<GameRoom>)> = self
            .rooms
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect();

        let mut evicted = 0;
        for (id, room) in rooms {
            if predicate(&room)
                && self
                    .rooms
                    .remove_if(&id, |_, current| Arc::ptr_eq(current, &room))
                    .is_some()
            {
                info!(game_id = %id, reason, "Room evicted");
                evicted += 1;
            }
        }
        evicted
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::with_valid_rules(RulesConfig::default())
    }
}
