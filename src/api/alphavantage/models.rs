use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Daily quote response body.
///
/// The series entries stay as raw JSON values: closes arrive as strings on
/// the live endpoint, and individual entries may be sparse or malformed
/// without invalidating the rest of the response. The normalizer decides
/// what to keep.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySeriesResponse {
    #[serde(rename = "Time Series (Daily)")]
    pub series: Option<BTreeMap<String, Value>>,
    /// Throttling notice; present means the request was rejected
    #[serde(rename = "Note")]
    pub note: Option<String>,
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
    /// Premium-endpoint / rate-plan notice, same treatment as `Note`
    #[serde(rename = "Information")]
    pub information: Option<String>,
}

impl DailySeriesResponse {
    /// The embedded failure marker, if the body carries one. A marker means
    /// the fetch failed even though the transport-level response succeeded.
    pub fn failure_marker(&self) -> Option<&str> {
        self.note
            .as_deref()
            .or(self.error_message.as_deref())
            .or(self.information.as_deref())
    }
}
