use thiserror::Error;

#[derive(Error, Debug)]
pub enum FiggieError {
    #[error("Invalid suit: {0}")]
    InvalidSuit(char),

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Player listed twice in roster: {0}")]
    DuplicatePlayer(String),

    #[error("Majority constant must be finite and greater than 1, got {0}")]
    InvalidMajorityConstant(f64),

    #[error("Observed card counts {counts:?} (s, c, d, h) fit no deck layout")]
    InconsistentObservations { counts: [u32; 4] },

    #[error("Invalid deck layout: {0}")]
    InvalidLayout(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("No round in progress")]
    NoActiveRound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type FiggieResult<T> = Result<T, FiggieError>;
