//! Job-posting data and the page-scraper message contract.
//!
//! The scraper collaborator emits one `DATA_EXTRACTED` message per page
//! visit; when required page elements are missing it emits nothing, and the
//! consumer treats job data as absent rather than as an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One scraped job posting. Immutable after creation; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobData {
    pub company: String,
    pub title: String,
    #[serde(default)]
    pub main_info: String,
    pub description: String,
    /// URL of the page the data was scraped from.
    #[serde(default)]
    pub url: String,
    /// Canonical job posting URL.
    #[serde(default)]
    pub job_url: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location: String,
}

/// Action tag on the scraper request message.
pub const ACTION_EXTRACT_DATA: &str = "EXTRACT_DATA";
/// Action tag on the scraper response message.
pub const ACTION_DATA_EXTRACTED: &str = "DATA_EXTRACTED";

/// Payload of a `DATA_EXTRACTED` message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedData {
    pub current: JobData,
    #[serde(default)]
    pub viewed_companies: HashMap<String, JobData>,
}

/// Full scraper response message: `{action, data}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedMessage {
    pub action: String,
    pub data: ExtractedData,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_json() -> serde_json::Value {
        serde_json::json!({
            "company": "Acme Corp",
            "title": "Rust Engineer",
            "mainInfo": "Amsterdam · Hybrid · Full-time",
            "description": "Build backend services in Rust.",
            "url": "https://example.com/jobs/search",
            "jobUrl": "https://example.com/jobs/view/123",
            "imageUrl": null,
            "location": "Amsterdam, NL"
        })
    }

    #[test]
    fn test_job_data_uses_camel_case_wire_names() {
        let job: JobData = serde_json::from_value(job_json()).unwrap();
        assert_eq!(job.main_info, "Amsterdam · Hybrid · Full-time");
        assert_eq!(job.job_url, "https://example.com/jobs/view/123");
        assert_eq!(job.image_url, None);

        let value = serde_json::to_value(&job).unwrap();
        assert!(value.get("jobUrl").is_some());
        assert!(value.get("job_url").is_none());
    }

    #[test]
    fn test_extracted_message_round_trip() {
        let message = serde_json::json!({
            "action": ACTION_DATA_EXTRACTED,
            "data": {
                "current": job_json(),
                "viewedCompanies": { "Acme Corp": job_json() }
            }
        });
        let parsed: ExtractedMessage = serde_json::from_value(message).unwrap();
        assert_eq!(parsed.action, ACTION_DATA_EXTRACTED);
        assert_eq!(parsed.data.current.company, "Acme Corp");
        assert_eq!(parsed.data.viewed_companies.len(), 1);
    }

    #[test]
    fn test_action_tags_match_wire_contract() {
        assert_eq!(ACTION_EXTRACT_DATA, "EXTRACT_DATA");
        assert_eq!(ACTION_DATA_EXTRACTED, "DATA_EXTRACTED");
    }

    #[test]
    fn test_viewed_companies_defaults_to_empty() {
        let message = serde_json::json!({
            "action": ACTION_DATA_EXTRACTED,
            "data": { "current": job_json() }
        });
        let parsed: ExtractedMessage = serde_json::from_value(message).unwrap();
        assert!(parsed.data.viewed_companies.is_empty());
    }
}
