use thiserror::Error;

pub type LaunchResult<T> = Result<T, LaunchError>;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Structural error: {0}")]
    Structural(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("Empty required collection: {0}")]
    Cardinality(String),

    #[error("Creative format conflict: {0}")]
    FormatConflict(String),

    #[error("Combination rule not supported: {0}")]
    UnsupportedRule(String),

    #[error("Blueprint parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
