use thiserror::Error;

/// Top-level error type for the autoalt engine.
#[derive(Debug, Error)]
pub enum AltTextError {
    #[error("no API key configured; set one in settings or the environment")]
    MissingApiKey,

    #[error("vision provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("vault error: {0}")]
    Vault(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
