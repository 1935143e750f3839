//! Domino parsing from id strings (e.g., "6-4", "0-0")

use std::str::FromStr;

use super::dominoes_types::Domino;
use crate::errors::domain::{DomainError, ValidationKind};

impl FromStr for Domino {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || {
            DomainError::validation(ValidationKind::ParseDomino, format!("Parse domino: {s}"))
        };
        let (a, b) = s.trim().split_once('-').ok_or_else(parse_err)?;
        if a.len() != 1 || b.len() != 1 {
            return Err(parse_err());
        }
        let a: u8 = a.parse().map_err(|_| parse_err())?;
        let b: u8 = b.parse().map_err(|_| parse_err())?;
        Domino::from_pips(a, b).map_err(|_| parse_err())
    }
}

/// Non-panicking helper to parse domino ids into tiles.
pub fn try_parse_dominoes<I, S>(tokens: I) -> Result<Vec<Domino>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Domino>())
        .collect()
}
