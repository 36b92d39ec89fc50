use crate::Equity;
use crate::dto::ApiEquity;
use crate::form::Variant;
use serde::Serialize;

/// One labelled line of the results panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub label: String,
    pub value: String,
}

impl Row {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The results panel for one successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Hero equity, also the width of the equity bar.
    pub equity: Equity,
    pub headline: String,
    pub rows: Vec<Row>,
    /// High, low, and scoop probabilities. Empty unless the game splits the pot.
    pub highlow: Vec<Row>,
    /// Equity against each opponent the service reported on.
    pub opponents: Vec<Row>,
}

impl Summary {
    pub fn new(response: &ApiEquity, variant: Option<Variant>) -> Self {
        let equity = response.headline();
        let split = variant.is_some_and(|v| v.is_split())
            || response
                .game_type
                .as_deref()
                .is_some_and(|g| g.contains("highlow"));
        let mut rows = vec![Row::new(
            "Total Iterations",
            response
                .iterations()
                .map(grouped)
                .unwrap_or_else(|| String::from("N/A")),
        )];
        if let Some(hands) = response.total_hands.filter(|n| *n > 0) {
            rows.push(Row::new("Opponent Hands Analyzed", hands.to_string()));
        }
        if let Some(ms) = response.elapsed_ms().filter(|ms| *ms > 0.) {
            rows.push(Row::new("Calculation Time", format!("{:.2}ms", ms)));
        }
        let highlow = match (split, response.highlow_details.as_ref()) {
            (true, Some(details)) => vec![
                Row::new("High Pot Win Probability", percent(details.high_equity.unwrap_or_default())),
                Row::new("Low Pot Win Probability", percent(details.low_equity.unwrap_or_default())),
                Row::new("Scoop Probability", percent(details.scoop_equity.unwrap_or_default())),
            ],
            _ => vec![],
        };
        let opponents = response
            .equity_graph
            .iter()
            .enumerate()
            .map(|(i, point)| Row::new(format!("Opponent {}", i + 1), percent(point.equity)))
            .collect();
        Self {
            equity,
            headline: percent(equity),
            rows,
            highlow,
            opponents,
        }
    }
}

fn percent(equity: Equity) -> String {
    format!("{:.2}%", equity)
}

/// Decimal digits in groups of three.
fn grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Equity: {}", self.headline)?;
        for row in self.highlow.iter().chain(self.rows.iter()).chain(self.opponents.iter()) {
            writeln!(f, "{}: {}", row.label, row.value)?;
        }
        Ok(())
    }
}
