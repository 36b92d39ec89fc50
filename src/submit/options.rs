use crate::form::FormError;
use serde::Deserialize;
use serde::Serialize;

/// How hard the service should work. Forwarded to it untouched.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    Fast,
    #[default]
    Normal,
    Accurate,
    VeryAccurate,
    Extreme,
    Adaptive,
}

impl Precision {
    pub const ALL: [Precision; 6] = [
        Precision::Fast,
        Precision::Normal,
        Precision::Accurate,
        Precision::VeryAccurate,
        Precision::Extreme,
        Precision::Adaptive,
    ];
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Precision::Fast => write!(f, "fast"),
            Precision::Normal => write!(f, "normal"),
            Precision::Accurate => write!(f, "accurate"),
            Precision::VeryAccurate => write!(f, "very_accurate"),
            Precision::Extreme => write!(f, "extreme"),
            Precision::Adaptive => write!(f, "adaptive"),
        }
    }
}

impl TryFrom<&str> for Precision {
    type Error = FormError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|p| p.to_string() == s.trim())
            .ok_or_else(|| FormError::UnknownPrecision(s.to_string()))
    }
}

/// Calculation options that travel with every request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub precision: Precision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_form() {
        for precision in Precision::ALL {
            let json = serde_json::to_string(&precision).unwrap();
            assert!(json == format!("\"{}\"", precision));
            assert!(Precision::try_from(precision.to_string().as_str()) == Ok(precision));
        }
    }
}
