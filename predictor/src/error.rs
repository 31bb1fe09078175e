use std::{fmt, io};

/// Text shown to the user for any failure that is not reported by the service itself.
pub const GENERIC_FAILURE: &str = "API request failed.";

/// All errors that can occur while requesting a churn prediction.
#[derive(Debug)]
pub enum PredictError {
    /// The service answered with an `error` field.
    Server(String),
    /// The request could not be completed or the response could not be parsed.
    Transport(io::Error),
    /// A field holds text the service cannot accept, caught before sending.
    InvalidForm { field: &'static str, value: String },
    /// The configured base URL cannot be used.
    InvalidConfig(String),
}

impl PredictError {
    /// The text the front end should show for this error.
    ///
    /// Server-reported errors are shown verbatim, everything else collapses to
    /// [`GENERIC_FAILURE`].
    pub fn user_message(&self) -> String {
        match self {
            Self::Server(msg) => msg.clone(),
            Self::Transport(_) | Self::InvalidForm { .. } | Self::InvalidConfig(_) => {
                GENERIC_FAILURE.to_string()
            }
        }
    }

    pub fn is_server_reported(&self) -> bool {
        matches!(self, Self::Server(_))
    }

    /// Builds a transport error for a response body that does not have the expected shape.
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::Transport(io::Error::new(io::ErrorKind::InvalidData, msg.into()))
    }
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Server(msg) => write!(f, "server error: {msg}"),
            Self::Transport(e) => write!(f, "transport error: {e}"),
            Self::InvalidForm { field, value } => {
                write!(f, "invalid value for {field}: '{value}'")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for PredictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PredictError {
    fn from(e: io::Error) -> Self {
        Self::Transport(e)
    }
}

impl From<serde_json::Error> for PredictError {
    fn from(e: serde_json::Error) -> Self {
        Self::Transport(io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
