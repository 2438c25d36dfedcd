use thiserror::Error;

/// Failure classes for a load attempt.
///
/// Every variant is terminal: there is no retry policy, and a failed load
/// leaves the dashboard in an explicit no-data state until the process is
/// restarted.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// No API key resolvable from the environment
    #[error("no Alpha Vantage API key configured")]
    MissingCredential,
    /// Request never produced a usable response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success HTTP status from the quote endpoint
    #[error("quote endpoint returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Recognized error marker inside an otherwise successful body
    /// (throttling notice, error message, premium-endpoint notice)
    #[error("quote endpoint rejected the request: {0}")]
    ThrottledOrMalformed(String),
    /// The expected daily series key is absent from the response
    #[error("unexpected response shape: daily series missing")]
    MalformedResponse,
}

impl DashboardError {
    /// Status line shown in the dashboard when a load attempt fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            DashboardError::MissingCredential => {
                "API key missing • set ALPHAVANTAGE_API_KEY"
            }
            _ => "Could not load data with provided API key",
        }
    }
}
