use std::fmt;

/// Errors at the gateway boundary.
///
/// `FetchFailed` covers queries the gateway rejected outright (after the retry
/// budget is spent, for retryable statuses). `Shape` means the response body
/// did not match the typed projection for the query — that is a contract
/// violation and fails fast rather than limping along with partial rows.
#[derive(Debug)]
pub enum GatewayError {
    Transport(reqwest::Error),
    FetchFailed { status: u16, body: String },
    Shape(String),
    AuthUnavailable(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Transport(e) => write!(f, "gateway unreachable: {e}"),
            GatewayError::FetchFailed { status, body } => {
                write!(f, "gateway rejected query (HTTP {status}): {body}")
            }
            GatewayError::Shape(e) => write!(f, "gateway response shape mismatch: {e}"),
            GatewayError::AuthUnavailable(e) => write!(f, "no valid gateway session: {e}"),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        GatewayError::Transport(e)
    }
}

/// Truncate an error body to something loggable.
pub(crate) fn body_excerpt(body: &str) -> String {
    body.chars().take(200).collect()
}
