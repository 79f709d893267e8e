use thiserror::Error;

/// Errors surfaced by the GitHub layer.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("404 Not Found: {0}")]
    NotFound(String),

    #[error("rate limited by GitHub: {0}")]
    RateLimited(String),

    #[error("authentication failed ({status}): {message}")]
    AuthFailed { status: u16, message: String },

    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Client(#[source] octocrab::Error),

    #[error("could not start the async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    /// Classifies an error response by status code and message.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            404 => ApiError::NotFound(message),
            429 => ApiError::RateLimited(message),
            // An exhausted quota answers 403 with a rate limit message.
            403 if message.to_lowercase().contains("rate limit") => ApiError::RateLimited(message),
            401 | 403 => ApiError::AuthFailed { status, message },
            _ => ApiError::Api { status, message },
        }
    }
}

impl From<octocrab::Error> for ApiError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => {
                ApiError::from_status(source.status_code.as_u16(), source.message.clone())
            }
            other => ApiError::Client(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
