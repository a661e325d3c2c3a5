//! The four LLM operations: CV extraction, tailoring, cover letters and
//! job scoring.

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::tags::extract_text_between_tags;
use crate::llm_client::LlmClient;
use crate::models::cv::{sample_cv, Cv};
use crate::models::job::JobData;
use crate::prompts::PromptLoader;

// Per-operation system messages.
const EXTRACT_SYSTEM: &str =
    "You are a careful assistant converting CV documents into structured \
     JSON. Follow the output format in the user's instructions exactly.";
const TAILOR_SYSTEM: &str =
    "You are an expert CV writer tailoring resumes to job descriptions. \
     Follow the output format in the user's instructions exactly.";
const SCORE_SYSTEM: &str =
    "You are a recruiter assessing how well a CV matches a job \
     description. Follow the output format in the user's instructions \
     exactly.";

fn cover_letter_system(company: &str) -> String {
    format!(
        "You are a personal consultant helping to draft a cover letter for \
         {company}. Follow the output format in the user's instructions \
         exactly."
    )
}

/// A generated cover letter plus its auxiliary metadata.
#[derive(Debug, Clone, Serialize)]
pub struct CoverLetter {
    pub letter: String,
    /// Self-reported match grade, when the model supplied one.
    pub score: Option<String>,
    /// Suggested download filename, `<Company>.txt`.
    pub filename: String,
}

#[derive(Clone)]
pub struct Pipelines {
    prompts: PromptLoader,
    llm: LlmClient,
}

impl Pipelines {
    pub fn new(prompts: PromptLoader, llm: LlmClient) -> Self {
        Self { prompts, llm }
    }

    /// Turns raw text extracted from an uploaded PDF into a structured CV.
    /// The sample CV is embedded in the prompt as the target JSON shape.
    pub async fn cv_from_extracted_text(
        &self,
        api_key: &str,
        cv_text: &str,
    ) -> Result<Cv, AppError> {
        info!("Extracting structured CV from {} chars of text", cv_text.len());

        let sample_json = serde_json::to_string_pretty(&sample_cv())
            .map_err(|e| AppError::Internal(e.into()))?;
        let prompt = self
            .prompts
            .load(
                "createCvObject.txt",
                &[("cv_text", cv_text), ("sample_json", &sample_json)],
            )
            .await
            .map_err(|e| AppError::Prompt(e.to_string()))?;

        let response = self.llm.call(api_key, EXTRACT_SYSTEM, &prompt).await?;
        parse_cv_response(&response)
    }

    /// Rewrites the stored CV against a job description. The CV structure
    /// must survive the round trip; a missing tag or malformed JSON fails
    /// the whole operation.
    pub async fn tailor_cv(
        &self,
        api_key: &str,
        cv: &Cv,
        job_description: &str,
    ) -> Result<Cv, AppError> {
        info!("Tailoring CV for a {} char job description", job_description.len());

        let cv_json =
            serde_json::to_string_pretty(cv).map_err(|e| AppError::Internal(e.into()))?;
        let prompt = self
            .prompts
            .load(
                "customizedResume.txt",
                &[("cv", &cv_json), ("job", job_description)],
            )
            .await
            .map_err(|e| AppError::Prompt(e.to_string()))?;

        let response = self.llm.call(api_key, TAILOR_SYSTEM, &prompt).await?;
        parse_cv_response(&response)
    }

    /// Generates a cover letter for a scraped job posting. The letter is
    /// required; the grade is auxiliary and may be absent.
    pub async fn cover_letter(
        &self,
        api_key: &str,
        job: &JobData,
    ) -> Result<CoverLetter, AppError> {
        info!("Generating cover letter for {}", job.company);

        let prompt = self
            .prompts
            .load(
                "coverLetter.txt",
                &[
                    ("company", &job.company),
                    ("location", &job.location),
                    ("description", &job.description),
                ],
            )
            .await
            .map_err(|e| AppError::Prompt(e.to_string()))?;

        let system = cover_letter_system(&job.company);
        let response = self.llm.call(api_key, &system, &prompt).await?;
        parse_cover_letter_response(&response, &job.company)
    }

    /// Scores the stored CV against a job description. Free-form assessment
    /// text, `"N/A"` when the model omitted the tag.
    pub async fn job_match_score(
        &self,
        api_key: &str,
        job_description: &str,
        cv: &Cv,
    ) -> Result<String, AppError> {
        info!("Scoring CV match against a {} char job description", job_description.len());

        let cv_json =
            serde_json::to_string_pretty(cv).map_err(|e| AppError::Internal(e.into()))?;
        let prompt = self
            .prompts
            .load(
                "generateJobScore.txt",
                &[("job_description", job_description), ("cv", &cv_json)],
            )
            .await
            .map_err(|e| AppError::Prompt(e.to_string()))?;

        let response = self.llm.call(api_key, SCORE_SYSTEM, &prompt).await?;
        Ok(extract_text_between_tags(&response, "assessment")
            .unwrap_or_else(|| "N/A".to_string()))
    }
}

/// Pulls the `<new_cv>` payload out of a model response and parses it.
fn parse_cv_response(response: &str) -> Result<Cv, AppError> {
    let json = extract_text_between_tags(response, "new_cv").ok_or_else(|| {
        AppError::Parse("response did not contain a <new_cv> tag".to_string())
    })?;
    serde_json::from_str(&json)
        .map_err(|e| AppError::Parse(format!("invalid CV JSON in <new_cv>: {e}")))
}

fn parse_cover_letter_response(response: &str, company: &str) -> Result<CoverLetter, AppError> {
    let letter = extract_text_between_tags(response, "letter").ok_or_else(|| {
        AppError::Parse("response did not contain a <letter> tag".to_string())
    })?;
    let score = extract_text_between_tags(response, "grade");

    Ok(CoverLetter {
        letter,
        score,
        filename: format!("{company}.txt"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cv_response_with_valid_tag() {
        let response = "Here is the result:\n<new_cv>{\"name\": \"Jane Doe\"}</new_cv>\nDone.";
        let cv = parse_cv_response(response).unwrap();
        assert_eq!(cv.name, "Jane Doe");
    }

    #[test]
    fn test_parse_cv_response_missing_tag_is_parse_error() {
        let result = parse_cv_response("{\"name\": \"Jane Doe\"}");
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn test_parse_cv_response_bad_json_is_parse_error() {
        let result = parse_cv_response("<new_cv>not json</new_cv>");
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn test_parse_cv_response_missing_name_is_parse_error() {
        let result = parse_cv_response("<new_cv>{\"title\": \"Engineer\"}</new_cv>");
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn test_cover_letter_system_names_the_company() {
        let system = cover_letter_system("Acme Corp");
        assert!(system.contains("cover letter for Acme Corp"));
    }

    #[test]
    fn test_parse_cover_letter_with_grade() {
        let response = "<letter>Dear hiring team,\n...</letter>\n<grade>8/10</grade>";
        let letter = parse_cover_letter_response(response, "Acme").unwrap();
        assert_eq!(letter.letter, "Dear hiring team,\n...");
        assert_eq!(letter.score.as_deref(), Some("8/10"));
        assert_eq!(letter.filename, "Acme.txt");
    }

    #[test]
    fn test_parse_cover_letter_grade_is_optional() {
        let letter = parse_cover_letter_response("<letter>Hello</letter>", "Acme").unwrap();
        assert_eq!(letter.score, None);
    }

    #[test]
    fn test_parse_cover_letter_missing_letter_is_parse_error() {
        let result = parse_cover_letter_response("<grade>9/10</grade>", "Acme");
        assert!(matches!(result, Err(AppError::Parse(_))));
    }
}
