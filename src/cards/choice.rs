use super::card::Card;
use serde::Serialize;

/// One entry of a card picker: the token submitted, the label shown, and
/// whether the label is drawn in red.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: String,
    pub display: String,
    pub red: bool,
}

impl From<Card> for Choice {
    fn from(card: Card) -> Self {
        Self {
            value: card.format(),
            display: format!("{}{}", card.rank(), card.suit().symbol()),
            red: card.suit().is_red(),
        }
    }
}

impl Choice {
    /// The 52 picker entries, in picker order.
    pub fn catalogue() -> Vec<Self> {
        Card::picker().map(Self::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_choice_is_ace_of_spades() {
        let choices = Choice::catalogue();
        assert!(choices.len() == 52);
        assert!(choices[0].value == "As");
        assert!(choices[0].display == "A♠");
        assert!(!choices[0].red);
        assert!(choices[1].value == "Ah");
        assert!(choices[1].red);
    }
}
