use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Out of cards: cannot draw from an empty deck")]
    OutOfCards,
    #[error("No round in progress: start a round first")]
    RoundNotStarted,
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),
}

pub type Result<T> = std::result::Result<T, Error>;
