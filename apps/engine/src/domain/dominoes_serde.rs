//! Serialization and deserialization for tile types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::dominoes_types::{Domino, Suit};

// Suit serde (plain integer 0..=6)
impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.value())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = u8::deserialize(deserializer)?;
        Suit::try_from(v).map_err(|_| serde::de::Error::custom(format!("Invalid suit: {v}")))
    }
}

// Domino serde (compact id like "6-4")
impl Serialize for Domino {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.id())
    }
}

impl<'de> Deserialize<'de> for Domino {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Domino>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

/// Expanded tile description for client-facing views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominoView {
    pub id: String,
    pub high: u8,
    pub low: u8,
    pub is_double: bool,
    pub count_value: u8,
    pub pip_total: u8,
}

impl From<Domino> for DominoView {
    fn from(d: Domino) -> Self {
        Self {
            id: d.id(),
            high: d.high().value(),
            low: d.low().value(),
            is_double: d.is_double(),
            count_value: d.count_value(),
            pip_total: d.pip_total(),
        }
    }
}
