//! The structured CV data model.
//!
//! This is the schema the extraction and tailoring prompts ask the model to
//! emit, and the only shape the rendering engine accepts. `name` is the one
//! field without a serde default: a tailored CV whose LLM output drops the
//! name must fail parsing instead of silently gaining one, since the export
//! filename derives from it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cv {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

/// Sample CV embedded in the extraction prompt so the model sees the exact
/// target shape.
pub fn sample_cv() -> Cv {
    Cv {
        name: "Jane Doe".to_string(),
        title: "Senior Software Engineer".to_string(),
        contact: Contact {
            location: "Amsterdam, NL".to_string(),
            phone: "+31 6 1234 5678".to_string(),
            email: "jane.doe@example.com".to_string(),
            linkedin: "linkedin.com/in/janedoe".to_string(),
        },
        summary: "Backend engineer with 8 years of experience building \
                  distributed services and developer tooling."
            .to_string(),
        skills: vec![
            "Rust".to_string(),
            "Distributed Systems".to_string(),
            "PostgreSQL".to_string(),
            "Kubernetes".to_string(),
        ],
        experience: vec![Experience {
            company: "Acme Corp".to_string(),
            location: "Amsterdam, NL".to_string(),
            roles: vec![Role {
                title: "Senior Software Engineer".to_string(),
                start_date: "Mar 2020".to_string(),
                end_date: "Present".to_string(),
                responsibilities: vec![
                    "Designed and operated the order-matching service handling 20k req/s"
                        .to_string(),
                    "Led migration from a monolith to event-driven services".to_string(),
                ],
            }],
        }],
        education: vec![Education {
            degree: "MSc Computer Science".to_string(),
            institution: "TU Delft".to_string(),
            start_date: "2013".to_string(),
            end_date: "2015".to_string(),
        }],
        certifications: vec![Certification {
            name: "CKA".to_string(),
            institution: "CNCF".to_string(),
            date: "2022".to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cv_round_trips_through_json() {
        let cv = sample_cv();
        let json = serde_json::to_string(&cv).unwrap();
        let recovered: Cv = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, cv);
    }

    #[test]
    fn test_missing_name_fails_to_parse() {
        // The pipeline must not inject a name the model never produced.
        let json = r#"{"title": "Engineer", "skills": ["Rust"]}"#;
        let result: Result<Cv, _> = serde_json::from_str(json);
        assert!(result.is_err(), "Cv without a name must not deserialize");
    }

    #[test]
    fn test_sparse_cv_defaults_sequences_to_empty() {
        let json = r#"{"name": "Jane Doe"}"#;
        let cv: Cv = serde_json::from_str(json).unwrap();
        assert!(cv.skills.is_empty());
        assert!(cv.experience.is_empty());
        assert!(cv.education.is_empty());
        assert!(cv.certifications.is_empty());
        assert!(cv.contact.email.is_empty());
    }

    #[test]
    fn test_role_requires_title() {
        let json = r#"{"start_date": "2020", "end_date": "2021"}"#;
        let result: Result<Role, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
