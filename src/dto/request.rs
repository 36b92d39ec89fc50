use crate::OMAHA_EQUITY_PATH;
use crate::STUD_EQUITY_PATH;
use crate::STUD_RANGE_PATH;
use crate::cards::Card;
use crate::form::Holding;
use crate::form::StudGame;
use crate::submit::Precision;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OmahaGame {
    Plo4,
    Plo5,
}

/// The Omaha opponent: a known hand or a range, never both. Flattened into
/// the request as `opponent_hand` or `opponent_range`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Opposition {
    #[serde(rename = "opponent_hand")]
    Hand(Vec<Card>),
    #[serde(rename = "opponent_range")]
    Range(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OmahaRequest {
    pub game_type: OmahaGame,
    pub hand: Vec<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<Vec<Card>>,
    #[serde(flatten)]
    pub opponent: Opposition,
    pub precision: Precision,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudRequest {
    pub your_down_cards: Vec<Card>,
    pub your_up_cards: Vec<Card>,
    pub opponent_down_cards: Vec<Card>,
    pub opponent_up_cards: Vec<Card>,
    pub game_type: StudGame,
    pub precision: Precision,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudHand {
    pub down_cards: Vec<Card>,
    pub up_cards: Vec<Card>,
}

impl From<Holding> for StudHand {
    fn from(holding: Holding) -> Self {
        Self {
            down_cards: holding.down,
            up_cards: holding.up,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudRangeRequest {
    pub your_down_cards: Vec<Card>,
    pub your_up_cards: Vec<Card>,
    pub opponent_range: Vec<StudHand>,
    pub game_type: StudGame,
    pub precision: Precision,
}

/// Any request the engine can hand to the network layer. Serializes as the
/// bare body of whichever shape it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Request {
    Omaha(OmahaRequest),
    Stud(StudRequest),
    StudRange(StudRangeRequest),
}

impl Request {
    /// Endpoint path, relative to the service base.
    pub fn path(&self) -> &'static str {
        match self {
            Request::Omaha(_) => OMAHA_EQUITY_PATH,
            Request::Stud(_) => STUD_EQUITY_PATH,
            Request::StudRange(_) => STUD_RANGE_PATH,
        }
    }
    /// JSON body.
    pub fn body(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
    /// Every card the request mentions, in payload order.
    pub fn cards(&self) -> Vec<Card> {
        match self {
            Request::Omaha(r) => r
                .hand
                .iter()
                .chain(r.board.iter().flatten())
                .chain(match &r.opponent {
                    Opposition::Hand(cards) => cards.as_slice(),
                    Opposition::Range(_) => &[],
                })
                .copied()
                .collect(),
            Request::Stud(r) => r
                .your_down_cards
                .iter()
                .chain(r.your_up_cards.iter())
                .chain(r.opponent_down_cards.iter())
                .chain(r.opponent_up_cards.iter())
                .copied()
                .collect(),
            Request::StudRange(r) => r
                .your_down_cards
                .iter()
                .chain(r.your_up_cards.iter())
                .chain(
                    r.opponent_range
                        .iter()
                        .flat_map(|h| h.down_cards.iter().chain(h.up_cards.iter())),
                )
                .copied()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|t| Card::parse(t).unwrap()).collect()
    }

    #[test]
    fn omaha_range_has_no_hand_key() {
        let request = Request::Omaha(OmahaRequest {
            game_type: OmahaGame::Plo4,
            hand: cards("As Ks Qs Js"),
            board: None,
            opponent: Opposition::Range(String::from("random")),
            precision: Precision::Fast,
        });
        let json = serde_json::to_value(&request).unwrap();
        let expected = serde_json::json!({
            "game_type": "plo4",
            "hand": ["As", "Ks", "Qs", "Js"],
            "opponent_range": "random",
            "precision": "fast",
        });
        assert!(json == expected);
        assert!(request.path() == "/api/v1/equity");
    }

    #[test]
    fn stud_range_nests_hands() {
        let request = Request::StudRange(StudRangeRequest {
            your_down_cards: cards("As Ks"),
            your_up_cards: vec![],
            opponent_range: vec![StudHand {
                down_cards: cards("2c"),
                up_cards: cards("3c 4c"),
            }],
            game_type: StudGame::Razz,
            precision: Precision::VeryAccurate,
        });
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["opponent_range"][0]["up_cards"] == serde_json::json!(["3c", "4c"]));
        assert!(json["game_type"] == "razz");
        assert!(json["precision"] == "very_accurate");
        assert!(request.cards().len() == 5);
        assert!(request.path() == "/api/v1/stud/range-equity");
    }
}
