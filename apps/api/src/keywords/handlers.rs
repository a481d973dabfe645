use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::keywords::extract::{extract_keywords, KeywordSet};
use crate::keywords::matcher::{match_keywords, KeywordMatch};
use crate::models::resume::Resume;

#[derive(Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct ExtractResponse {
    pub keywords: KeywordSet,
    pub count: usize,
}

#[derive(Deserialize)]
pub struct MatchRequest {
    pub job_description: String,
    pub resume: Resume,
}

#[derive(Serialize)]
pub struct MatchResponse {
    #[serde(flatten)]
    pub result: KeywordMatch,
    /// Convenience count so the UI can render "Matching X of Y keywords"
    /// without measuring the matched array itself.
    pub matched_count: usize,
}

/// POST /api/v1/keywords/extract
pub async fn handle_extract(
    Json(req): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    let keywords = extract_keywords(&req.text);
    let count = keywords.len();
    Ok(Json(ExtractResponse { keywords, count }))
}

/// POST /api/v1/keywords/match
///
/// The extractor and matcher are total, but a blank job description can only
/// mean the user has not pasted one yet, so reject it here the same way the
/// editor does before running an analysis.
pub async fn handle_match(
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description must not be empty".to_string(),
        ));
    }

    let resume_text = req.resume.keyword_text();
    let result = match_keywords(&req.job_description, &resume_text);
    debug!(
        matched = result.matched.len(),
        total = result.total_job_keywords,
        "keyword match computed"
    );

    let matched_count = result.matched.len();
    Ok(Json(MatchResponse {
        result,
        matched_count,
    }))
}

/// GET /api/v1/resumes/sample
pub async fn handle_sample_resume() -> Json<Resume> {
    Json(Resume::sample())
}
