use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalibError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Prize catalog is empty")]
    EmptyCatalog,

    #[error("Cost per play must be positive, got {cost}")]
    NonPositiveCost { cost: f64 },

    #[error("Trial count must be positive")]
    NonPositiveTrials,

    #[error("Probability vector length {probabilities} does not match catalog length {prizes}")]
    LengthMismatch { prizes: usize, probabilities: usize },

    #[error("Numerical degeneracy: {reason}")]
    Degenerate { reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type CalibResult<T> = Result<T, CalibError>;
