use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{
    valid_bid_range, CHAT_HISTORY_LIMIT, CHAT_MAX_CHARS, FORCED_DEALER_BID, WINNING_MARKS,
};
use crate::error::AppError;

/// Match tunables. Defaults are the standard rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    pub winning_marks: u8,
    pub forced_dealer_bid: u8,
    pub chat_history_limit: usize,
    pub chat_max_chars: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            winning_marks: WINNING_MARKS,
            forced_dealer_bid: FORCED_DEALER_BID,
            chat_history_limit: CHAT_HISTORY_LIMIT,
            chat_max_chars: CHAT_MAX_CHARS,
        }
    }
}

impl RulesConfig {
    /// Load from `TEXAS42_*` environment variables; unset ones keep their defaults.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            winning_marks: parse_var(&lookup, "TEXAS42_WINNING_MARKS", defaults.winning_marks)?,
            forced_dealer_bid: parse_var(
                &lookup,
                "TEXAS42_FORCED_DEALER_BID",
                defaults.forced_dealer_bid,
            )?,
            chat_history_limit: parse_var(
                &lookup,
                "TEXAS42_CHAT_HISTORY_LIMIT",
                defaults.chat_history_limit,
            )?,
            chat_max_chars: parse_var(&lookup, "TEXAS42_CHAT_MAX_CHARS", defaults.chat_max_chars)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.winning_marks == 0 {
            return Err(AppError::config(
                "winning_marks must be at least 1".to_string(),
            ));
        }
        let range = valid_bid_range();
        if !range.contains(&self.forced_dealer_bid) {
            return Err(AppError::config(format!(
                "forced_dealer_bid must be between {} and {}, got {}",
                range.start(),
                range.end(),
                self.forced_dealer_bid
            )));
        }
        if self.chat_history_limit == 0 || self.chat_max_chars == 0 {
            return Err(AppError::config(
                "chat limits must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::config(format!(
                "Environment variable '{name}' has invalid value '{raw}'"
            ))
        }),
    }
}
