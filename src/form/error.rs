use crate::SequenceId;

/// Misuse of the form API by the presentation layer: addressing something
/// that is not currently on the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("no slot {0:?} on the form")]
    UnknownSlot(String),
    #[error("no opponent {0} on the form")]
    UnknownOpponent(SequenceId),
    #[error("unknown game type {0:?}")]
    UnknownVariant(String),
    #[error("unknown opponent mode {0:?}")]
    UnknownMode(String),
    #[error("unknown precision {0:?}")]
    UnknownPrecision(String),
    #[error("opponents can only be added to multi-opponent stud")]
    NotMultiOpponent,
}
