//! Best-effort spreadsheet logging of generated cover letters.
//!
//! Every record is POSTed as JSON to the configured web-app URL. Logging
//! must never fail the action that triggered it: an unconfigured URL skips
//! with a log line, and a failed request is logged and swallowed.

use chrono::Utc;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetRecord {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    /// YYYY-MM-DD, the day the record was logged.
    pub date_added: String,
    pub url: String,
    pub score: Option<String>,
    pub cover_letter: Option<String>,
}

impl SheetRecord {
    pub fn today() -> String {
        Utc::now().format("%Y-%m-%d").to_string()
    }
}

#[derive(Clone)]
pub struct SheetClient {
    client: Client,
    url: Option<String>,
}

impl SheetClient {
    pub fn new(url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// Fire-and-forget append. Failures are logged, never propagated.
    pub async fn log(&self, record: &SheetRecord) {
        let Some(url) = &self.url else {
            debug!("Sheet URL not configured, skipping log for {}", record.company);
            return;
        };

        match self.client.post(url).json(record).send().await {
            Ok(response) if response.status().is_success() => {
                debug!("Logged {} to sheet", record.company);
            }
            Ok(response) => {
                warn!(
                    "Sheet logging for {} returned status {}",
                    record.company,
                    response.status()
                );
            }
            Err(e) => {
                warn!("Sheet logging for {} failed: {e}", record.company);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_camel_case() {
        let record = SheetRecord {
            job_title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            description: "Build things".to_string(),
            date_added: "2026-08-29".to_string(),
            url: "https://example.com/job".to_string(),
            score: Some("8/10".to_string()),
            cover_letter: Some("Dear team".to_string()),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["jobTitle"], "Engineer");
        assert_eq!(value["dateAdded"], "2026-08-29");
        assert_eq!(value["coverLetter"], "Dear team");
        assert_eq!(value["score"], "8/10");
    }

    #[test]
    fn test_today_is_iso_date() {
        let today = SheetRecord::today();
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }

    #[tokio::test]
    async fn test_unconfigured_client_does_not_error() {
        let client = SheetClient::new(None);
        let record = SheetRecord {
            job_title: String::new(),
            company: "Acme".to_string(),
            location: String::new(),
            description: String::new(),
            date_added: SheetRecord::today(),
            url: String::new(),
            score: None,
            cover_letter: None,
        };
        // Must return, not panic or propagate.
        client.log(&record).await;
    }
}
