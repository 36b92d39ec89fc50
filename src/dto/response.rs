use crate::Equity;
use serde::Deserialize;
use serde::Serialize;

/// Success body of any equity endpoint. The three endpoints disagree on
/// field names and on which fields they send at all, so everything is
/// optional and read leniently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiEquity {
    pub your_equity: Option<Equity>,
    pub equity: Option<Equity>,
    pub user_equity: Option<Equity>,
    pub game_type: Option<String>,
    pub total_iterations: Option<u64>,
    pub total_hands: Option<u64>,
    pub calculation_time_ms: Option<f64>,
    pub highlow_details: Option<ApiHighLow>,
    pub equity_graph: Vec<ApiEquityPoint>,
    pub calculation_details: Option<ApiCalculation>,
}

impl ApiEquity {
    /// Hero equity under whichever name the endpoint used.
    pub fn headline(&self) -> Equity {
        self.your_equity
            .or(self.equity)
            .or(self.user_equity)
            .unwrap_or_default()
    }
    pub fn iterations(&self) -> Option<u64> {
        self.total_iterations
            .or_else(|| self.calculation_details.as_ref().and_then(|d| d.total_iterations))
    }
    pub fn elapsed_ms(&self) -> Option<f64> {
        self.calculation_time_ms
            .or_else(|| self.calculation_details.as_ref().and_then(|d| d.calculation_time_ms))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiHighLow {
    pub high_equity: Option<Equity>,
    pub low_equity: Option<Equity>,
    pub scoop_equity: Option<Equity>,
}

/// Equity against one member of the opponent range. The opponent's cards
/// come back in endpoint-specific shapes and are kept opaque.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiEquityPoint {
    pub hand: serde_json::Value,
    pub equity: Equity,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiCalculation {
    pub converged_at: Option<u64>,
    pub total_iterations: Option<u64>,
    pub confidence_level: Option<f64>,
    pub calculation_time_ms: Option<f64>,
}

/// Error body of any non-2xx reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiFailure {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ApiFailure {
    /// Human-readable text, preferring the descriptive `message`.
    pub fn text(&self) -> Option<&str> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_stud_range_body() {
        let body = r#"{
            "your_equity": 61.25,
            "game_type": "stud_highlow8",
            "total_hands": 2,
            "equity_graph": [
                {"hand": {"down_cards": ["2c"], "up_cards": []}, "equity": 55.0},
                {"hand": {"down_cards": ["3c"]}, "equity": 67.5}
            ],
            "highlow_details": {"high_equity": 40.0, "low_equity": 30.0, "scoop_equity": 12.5},
            "calculation_details": {"total_iterations": 50000, "calculation_time_ms": 12}
        }"#;
        let equity = serde_json::from_str::<ApiEquity>(body).unwrap();
        assert!(equity.headline() == 61.25);
        assert!(equity.equity_graph.len() == 2);
        assert!(equity.iterations() == Some(50000));
        assert!(equity.elapsed_ms() == Some(12.0));
        assert!(equity.highlow_details.and_then(|h| h.scoop_equity) == Some(12.5));
    }

    #[test]
    fn reads_omaha_body() {
        let body = r#"{"user_equity": 48.0, "total_hands": 1, "equity_graph": []}"#;
        let equity = serde_json::from_str::<ApiEquity>(body).unwrap();
        assert!(equity.headline() == 48.0);
        assert!(equity.iterations().is_none());
    }

    #[test]
    fn failure_prefers_message() {
        let failure = serde_json::from_str::<ApiFailure>(r#"{"error":"invalid_board","message":"Board must contain 3-5 cards"}"#).unwrap();
        assert!(failure.text() == Some("Board must contain 3-5 cards"));
        let failure = serde_json::from_str::<ApiFailure>(r#"{"error":"boom"}"#).unwrap();
        assert!(failure.text() == Some("boom"));
        let failure = serde_json::from_str::<ApiFailure>("{}").unwrap();
        assert!(failure.text().is_none());
    }
}
