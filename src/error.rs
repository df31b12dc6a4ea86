use thiserror::Error;

use crate::draft::FieldErrors;

#[derive(Error, Debug)]
pub enum TixError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid ticket draft:\n{}", .0.join("\n"))]
    InvalidDraft(Vec<String>),

    #[error("{0}")]
    Other(String),
}

impl TixError {
    /// Build an `Api` error from a response status and a body excerpt.
    pub fn api(status: reqwest::StatusCode, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        } else {
            let mut excerpt: String = body.trim().chars().take(200).collect();
            if excerpt.len() < body.trim().len() {
                excerpt.push('…');
            }
            excerpt
        };
        TixError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

impl From<FieldErrors> for TixError {
    fn from(errors: FieldErrors) -> Self {
        TixError::InvalidDraft(errors.messages().iter().map(|m| m.to_string()).collect())
    }
}

pub type Result<T> = std::result::Result<T, TixError>;
