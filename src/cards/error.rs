/// Why a raw token is not a card. Every variant means the same thing to the
/// form: the slot is unfilled and marked as a format error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("invalid rank {0:?}")]
    Rank(char),
    #[error("invalid suit {0:?}")]
    Suit(char),
    #[error("card must be 2 characters, got {0:?}")]
    Shape(String),
}
