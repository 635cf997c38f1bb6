// ============================================================
// SHEETS CLIENT
// ============================================================
// Outbound HTTP against the spreadsheet host's CSV export

use reqwest::Client;

use crate::domain::error::{AppError, Result};

/// HTTP client for pulling CSV exports from the spreadsheet host
pub struct SheetsClient {
    http: Client,
}

impl SheetsClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// Fetch `url` and return the response body as text.
    ///
    /// One plain GET: no extra headers, no retry, default timeouts.
    /// A non-2xx status is an error carrying the status and whatever
    /// body text the host returned.
    pub async fn fetch_csv(&self, url: &str) -> Result<String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::FetchError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamError(format!(
                "Export URL returned {}: {}",
                status, text
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::FetchError(format!("Failed to read response body: {}", e)))
    }
}

impl Default for SheetsClient {
    fn default() -> Self {
        Self::new()
    }
}
