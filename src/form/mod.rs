pub mod controller;
pub mod error;
pub mod opponents;
pub mod registry;
pub mod role;
pub mod slot;
pub mod snapshot;
pub mod validator;
pub mod variant;

pub use controller::*;
pub use error::*;
pub use opponents::*;
pub use registry::*;
pub use role::*;
pub use slot::*;
pub use snapshot::*;
pub use validator::*;
pub use variant::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::dto::Request;
    use crate::submit::BuildError;
    use crate::submit::Precision;
    use crate::submit::SubmitError;

    fn fill(form: &mut Form, ids: &[&str], tokens: &str) {
        for (id, token) in ids.iter().zip(tokens.split_whitespace()) {
            form.set_card_by_id(id, token).unwrap();
        }
    }

    #[test]
    fn omaha_hand_against_random_range() {
        let mut form = Form::new();
        form.select(Some(Variant::Plo4));
        form.set_mode(OpponentMode::Range);
        form.set_precision(Precision::VeryAccurate);
        fill(&mut form, &["ploHand1", "ploHand2", "ploHand3", "ploHand4"], "as KS qs jS");
        fill(&mut form, &["ploBoard1", "ploBoard2", "ploBoard3"], "ah kh 10h");
        form.set_range("  random ");
        let request = form.request().unwrap();
        assert!(request.path() == "/api/v1/equity");
        let body = serde_json::from_str::<serde_json::Value>(&request.body().unwrap()).unwrap();
        let expected = serde_json::json!({
            "game_type": "plo4",
            "hand": ["As", "Ks", "Qs", "Js"],
            "board": ["Ah", "Kh", "Th"],
            "opponent_range": "random",
            "precision": "very_accurate",
        });
        assert!(body == expected);
    }

    #[test]
    fn duplicate_is_flagged_live_and_blocks_the_build() {
        let mut form = Form::new();
        form.select(Some(Variant::Plo4));
        fill(&mut form, &["ploHand1", "ploHand2", "ploHand3", "ploHand4"], "As Ks Qs Js");
        fill(&mut form, &["ploOpp1", "ploOpp2", "ploOpp3", "ploOpp4"], "As Kd Qd Jd");
        let flagged = form.flagged().iter().map(|r| r.to_string()).collect::<Vec<String>>();
        assert!(flagged == vec!["ploHand1", "ploOpp1"]);
        assert!(form.begin() == Err(SubmitError::Build(BuildError::Duplicate)));
        assert!(!form.is_busy());
        form.set_card_by_id("ploOpp1", "Ad").unwrap();
        assert!(form.flagged().is_empty());
        assert!(matches!(form.begin(), Ok(Request::Omaha(_))));
    }

    #[test]
    fn stud_single_with_empty_opponent() {
        let mut form = Form::new();
        form.select(Some(Variant::Stud(StudGame::Razz)));
        fill(&mut form, &["studYourDown1", "studYourDown2", "studYourDown3"], "As Ks Qs");
        let request = form.request().unwrap();
        assert!(request.path() == "/api/v1/stud/equity");
        let body = serde_json::to_value(&request).unwrap();
        assert!(body["opponent_down_cards"] == serde_json::json!([]));
        assert!(body["opponent_up_cards"] == serde_json::json!([]));
        assert!(body["game_type"] == "razz");
        assert!(body["precision"] == "normal");
    }

    #[test]
    fn stud_multi_opponent_lifecycle() {
        let mut form = Form::new();
        form.select(Some(Variant::Stud(StudGame::StudHighlow8)));
        form.set_mode(OpponentMode::Range);
        assert!(form.add_opponent() == Ok(2));
        form.remove_opponent(1).unwrap();
        form.remove_opponent(2).unwrap();
        assert!(form.add_opponent() == Ok(3));
        assert!(form.registry().contains(Role::try_from("studOpp3Down1").unwrap()));
        assert!(form.set_card_by_id("studOpp1Down1", "2c") == Err(FormError::UnknownSlot(String::from("studOpp1Down1"))));

        fill(&mut form, &["studYourDown1", "studYourUp1"], "Ah 5d");
        assert!(form.request() == Err(BuildError::NoOpponents));
        fill(&mut form, &["studOpp3Up1"], "5d");
        assert!(form.request() == Err(BuildError::Duplicate));
        fill(&mut form, &["studOpp3Up1"], "6d");
        let request = form.request().unwrap();
        assert!(request.path() == "/api/v1/stud/range-equity");
        let body = serde_json::to_value(&request).unwrap();
        assert!(body["opponent_range"] == serde_json::json!([{"down_cards": [], "up_cards": ["6d"]}]));
    }

    #[test]
    fn variant_switch_keeps_surviving_values() {
        let mut form = Form::new();
        form.select(Some(Variant::Plo5));
        fill(&mut form, &["ploHand1", "ploHand5", "ploBoard2"], "As 2c 7h");
        form.select(Some(Variant::Plo4));
        assert!(form.set_card_by_id("ploHand5", "3c").is_err());
        form.select(Some(Variant::Plo5));
        let views = form.views();
        let value = |id: &str| views.iter().find(|v| v.id == id).and_then(|v| v.value);
        assert!(value("ploHand1") == Card::parse("As").ok());
        assert!(value("ploBoard2") == Card::parse("7h").ok());
        assert!(value("ploHand5").is_none());
    }

    #[test]
    fn no_game_selected() {
        let mut form = Form::new();
        assert!(form.begin() == Err(SubmitError::Build(BuildError::NoVariant)));
        assert!(form.outcome() == Some(&Outcome::Failure(String::from("Please select a game type"))));
    }
}
