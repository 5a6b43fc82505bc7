use std::fmt;

/// Custom error type for gateway stats operations
#[derive(Debug)]
pub enum GwError {
    /// HTTP request failed (network error, timeout)
    Http(reqwest::Error),
    /// API returned a non-success status
    Api { status: u16, body: String },
    /// Response decoded but has a shape we do not understand
    UnexpectedFormat { resource: String, raw: String },
    /// Response body is not valid JSON
    Json(String),
    /// Credential file missing, empty or unparseable
    Credentials(String),
    /// Configuration error
    Config(String),
    /// Reading from or writing to the operator terminal failed
    Terminal(std::io::Error),
}

impl GwError {
    /// True for errors raised while talking to the remote service
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            GwError::Http(_) | GwError::Api { .. } | GwError::UnexpectedFormat { .. } | GwError::Json(_)
        )
    }
}

impl fmt::Display for GwError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GwError::Http(e) => write!(f, "Request failed: {}", e),
            GwError::Api { status, body } => {
                write!(f, "Mist API returned {}", status)?;
                if !body.is_empty() {
                    write!(f, "\n{}", body)?;
                }
                Ok(())
            }
            GwError::UnexpectedFormat { resource, raw } => {
                write!(
                    f,
                    "Unexpected response format for {}, raw payload:\n{}",
                    resource, raw
                )
            }
            GwError::Json(msg) => write!(f, "Failed to decode JSON response: {}", msg),
            GwError::Credentials(msg) => write!(f, "{}", msg),
            GwError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GwError::Terminal(e) => write!(f, "Terminal I/O failed: {}", e),
        }
    }
}

impl std::error::Error for GwError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GwError::Http(e) => Some(e),
            GwError::Terminal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GwError {
    fn from(err: reqwest::Error) -> Self {
        GwError::Http(err)
    }
}

impl From<serde_json::Error> for GwError {
    fn from(err: serde_json::Error) -> Self {
        GwError::Json(err.to_string())
    }
}

impl From<std::io::Error> for GwError {
    fn from(err: std::io::Error) -> Self {
        GwError::Terminal(err)
    }
}

/// Result type alias for gateway stats operations
pub type Result<T> = std::result::Result<T, GwError>;
