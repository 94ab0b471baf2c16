use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {actual} (accepted: {accepted:?}), body: {body}")]
    UnexpectedStatus {
        accepted: Vec<u16>,
        actual: u16,
        body: String,
    },

    #[error("Schema violation: {violations}; offending instance: {instance}")]
    SchemaViolation {
        violations: String,
        instance: serde_json::Value,
    },

    #[error("Response body is not valid JSON: {body}")]
    NonJsonBody { body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, ProbeError>;
