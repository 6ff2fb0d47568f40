use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlainsightError {
    /// A key mapping failed the bijection invariant.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Unusable search configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Model serialization or deserialization failure.
    #[error("model error: {0}")]
    Model(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch all for unexpected internal problems.
    #[error("internal error: {0}")]
    Internal(String),
}
