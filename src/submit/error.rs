/// A snapshot that cannot become a request. Each variant displays as the one
/// message the user sees for it; building stops at the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("Please select a game type")]
    NoVariant,
    #[error("Please enter all {0} cards for your hand")]
    IncompleteHand(usize),
    #[error("Board must have at least 3 cards (flop)")]
    PartialBoard,
    #[error("Please enter all {0} cards for the opponent hand")]
    IncompleteOpponent(usize),
    #[error("Please enter an opponent range")]
    EmptyRange,
    #[error("Please enter at least some cards for your hand")]
    EmptyStudHand,
    #[error("Please enter at least one opponent")]
    NoOpponents,
    #[error("Duplicate cards detected")]
    Duplicate,
}

/// The request left (or tried to leave) but no usable equity came back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Connectivity failure before any status arrived.
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx reply; the message comes from the error body when it has one.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// 2xx reply whose body is not an equity result.
    #[error("Network error: {0}")]
    Decode(String),
}

/// Why a submit attempt produced no outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Another request from this form is still in flight.
    #[error("A calculation is already in progress")]
    Busy,
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
