//! Room chat log.

use serde::{Deserialize, Serialize};

use crate::domain::player::UserId;
use crate::domain::state::Game;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub user_id: UserId,
    pub username: String,
    pub text: String,
    pub is_spectator: bool,
}

/// Append a message, truncating its text and dropping the oldest entries
/// beyond the configured history limit. Allowed in every phase.
pub fn add_chat_message(
    game: &mut Game,
    user_id: UserId,
    username: impl Into<String>,
    text: &str,
    is_spectator: bool,
) -> ChatMessage {
    let message = ChatMessage {
        user_id,
        username: username.into(),
        text: text.chars().take(game.rules.chat_max_chars).collect(),
        is_spectator,
    };
    game.chat.push(message.clone());

    let limit = game.rules.chat_history_limit;
    if game.chat.len() > limit {
        let excess = game.chat.len() - limit;
        game.chat.drain(..excess);
    }
    message
}
