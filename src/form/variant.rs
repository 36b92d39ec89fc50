use super::error::FormError;
use crate::PLO4_CARDS;
use crate::PLO5_CARDS;
use serde::Deserialize;
use serde::Serialize;

/// Which Stud game the service should score.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudGame {
    Razz,
    StudHigh,
    StudHighlow8,
}

/// The selected game. Absence of a variant is the form's initial state.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Variant {
    Plo4,
    Plo5,
    Stud(StudGame),
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Plo4,
        Variant::Plo5,
        Variant::Stud(StudGame::Razz),
        Variant::Stud(StudGame::StudHigh),
        Variant::Stud(StudGame::StudHighlow8),
    ];

    /// Omaha hole card count, if this is an Omaha game.
    pub fn hole_cards(&self) -> Option<usize> {
        match self {
            Variant::Plo4 => Some(PLO4_CARDS),
            Variant::Plo5 => Some(PLO5_CARDS),
            Variant::Stud(_) => None,
        }
    }
    pub fn is_stud(&self) -> bool {
        matches!(self, Variant::Stud(_))
    }
    /// Split-pot games report high, low, and scoop equities.
    pub fn is_split(&self) -> bool {
        matches!(self, Variant::Stud(StudGame::StudHighlow8))
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Variant::Plo4 => write!(f, "plo4"),
            Variant::Plo5 => write!(f, "plo5"),
            Variant::Stud(StudGame::Razz) => write!(f, "razz"),
            Variant::Stud(StudGame::StudHigh) => write!(f, "stud_high"),
            Variant::Stud(StudGame::StudHighlow8) => write!(f, "stud_highlow8"),
        }
    }
}

impl TryFrom<&str> for Variant {
    type Error = FormError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|v| v.to_string() == s.trim())
            .ok_or_else(|| FormError::UnknownVariant(s.to_string()))
    }
}

/// How opponents are entered. In Omaha, `Range` is a free-text range; in
/// Stud, `Range` is the multi-opponent list of opponent blocks.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum OpponentMode {
    #[default]
    Single,
    Range,
}

impl std::fmt::Display for OpponentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OpponentMode::Single => write!(f, "single"),
            OpponentMode::Range => write!(f, "range"),
        }
    }
}

impl TryFrom<&str> for OpponentMode {
    type Error = FormError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "single" | "specific" | "hand" => Ok(OpponentMode::Single),
            "range" | "multi" => Ok(OpponentMode::Range),
            _ => Err(FormError::UnknownMode(s.to_string())),
        }
    }
}
