use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    /// The upstream rejected our request as malformed (carrier HTTP 400).
    #[error("Upstream rejected request: {0}")]
    UpstreamRejected(String),

    /// The upstream rejected our credentials (carrier HTTP 401/403).
    /// The message never carries the credentials themselves.
    #[error("Upstream configuration error: {0}")]
    UpstreamConfig(String),

    /// No response from the upstream at all.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Any other non-success upstream answer.
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Custom error: {0}")]
    Custom(String),
}
