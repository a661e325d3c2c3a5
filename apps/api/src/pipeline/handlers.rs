//! Axum route handlers for the LLM pipelines and job ingestion.

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::cv::Cv;
use crate::models::job::{ExtractedMessage, JobData, ACTION_DATA_EXTRACTED};
use crate::pipeline::extract::join_pages;
use crate::sheet::SheetRecord;
use crate::state::AppState;
use crate::storage;

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub assessment: String,
}

#[derive(Debug, Serialize)]
pub struct ViewedResponse {
    pub viewed_companies: Vec<JobData>,
}

/// POST /api/v1/cv/upload
///
/// Multipart upload of a CV as PDF. The document text is extracted page by
/// page, an LLM turns it into a structured CV, and the result overwrites
/// the stored slot wholesale.
pub async fn handle_cv_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Cv>, AppError> {
    let mut pdf_bytes: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
            pdf_bytes = Some(bytes.to_vec());
        }
    }

    let pdf_bytes = pdf_bytes
        .ok_or_else(|| AppError::Validation("Missing multipart field 'file'".to_string()))?;
    if pdf_bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let pages = state.extractor.extract_pages(&pdf_bytes).await?;
    let text = join_pages(&pages);
    info!("Extracted {} pages from uploaded CV", pages.len());
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "No text could be extracted from the uploaded PDF".to_string(),
        ));
    }

    let api_key = state.resolve_api_key().await?;
    let cv = state
        .pipelines
        .cv_from_extracted_text(&api_key, &text)
        .await?;

    storage::save_cv(state.store.as_ref(), &cv).await?;
    info!("Stored extracted CV for {}", cv.name);
    Ok(Json(cv))
}

/// POST /api/v1/cv/tailor
///
/// Tailors the stored CV to a job description and returns the rendered PDF.
pub async fn handle_cv_tailor(
    State(state): State<AppState>,
    Json(request): Json<JobDescriptionRequest>,
) -> Result<Response, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let cv = storage::load_cv(state.store.as_ref())
        .await?
        .ok_or_else(|| AppError::NotFound("No CV is stored; upload one first".to_string()))?;

    let api_key = state.resolve_api_key().await?;
    let tailored = state
        .pipelines
        .tailor_cv(&api_key, &cv, &request.job_description)
        .await?;

    let rendered = state.renderer.render(&tailored)?;
    info!(
        "Rendered tailored CV {} ({} pages)",
        rendered.filename, rendered.page_count
    );

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", rendered.filename),
        ),
    ];
    Ok((headers, rendered.bytes).into_response())
}

/// POST /api/v1/cover-letter
///
/// Generates a cover letter for a scraped job posting, then logs the job to
/// the spreadsheet. Logging is best-effort and never fails the request.
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(job): Json<JobData>,
) -> Result<Json<crate::pipeline::CoverLetter>, AppError> {
    if job.company.trim().is_empty() {
        return Err(AppError::Validation("company cannot be empty".to_string()));
    }

    let api_key = state.resolve_api_key().await?;
    let letter = state.pipelines.cover_letter(&api_key, &job).await?;

    let record = SheetRecord {
        job_title: job.title.clone(),
        company: job.company.clone(),
        location: job.location.clone(),
        description: job.description.clone(),
        date_added: SheetRecord::today(),
        url: job.job_url.clone(),
        score: letter.score.clone(),
        cover_letter: Some(letter.letter.clone()),
    };
    state.sheet.log(&record).await;

    Ok(Json(letter))
}

/// POST /api/v1/jobs/score
///
/// Scores the stored CV against a job description.
pub async fn handle_job_score(
    State(state): State<AppState>,
    Json(request): Json<JobDescriptionRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let cv = storage::load_cv(state.store.as_ref())
        .await?
        .ok_or_else(|| AppError::NotFound("No CV is stored; upload one first".to_string()))?;

    let api_key = state.resolve_api_key().await?;
    let assessment = state
        .pipelines
        .job_match_score(&api_key, &request.job_description, &cv)
        .await?;

    Ok(Json(ScoreResponse { assessment }))
}

/// POST /api/v1/jobs/extracted
///
/// Ingests a scraper `DATA_EXTRACTED` message into the session cache. Any
/// other action tag is rejected.
pub async fn handle_jobs_extracted(
    State(state): State<AppState>,
    Json(message): Json<ExtractedMessage>,
) -> Result<StatusCode, AppError> {
    if message.action != ACTION_DATA_EXTRACTED {
        return Err(AppError::Validation(format!(
            "Unexpected action '{}'",
            message.action
        )));
    }

    let mut viewed = state.viewed.lock().await;
    viewed.merge(message.data.viewed_companies.into_values());
    viewed.insert(message.data.current);
    info!("Session cache holds {} companies", viewed.len());

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/jobs/viewed
pub async fn handle_jobs_viewed(State(state): State<AppState>) -> Json<ViewedResponse> {
    let viewed = state.viewed.lock().await;
    Json(ViewedResponse {
        viewed_companies: viewed.snapshot(),
    })
}
