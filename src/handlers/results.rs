// src/handlers/results.rs

use axum::{Json, extract::rejection::JsonRejection, response::IntoResponse};
use validator::Validate;

use crate::{error::AppError, grading::grade, models::exam_record::SubmitAttemptRequest};

/// Grades a finished attempt against the question set it was served.
///
/// * Multi-select answers match regardless of letter order.
/// * Questions without an answer key count towards the total but never score.
pub async fn grade_attempt(
    payload: Result<Json<SubmitAttemptRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    if let Err(validation_errors) = req.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let report = grade(&req.exam_type, &req.questions, &req.answers, &req.flags);

    tracing::info!(
        "Graded {} attempt: {}/{} ({}%)",
        report.exam_type,
        report.score,
        report.total_questions,
        report.percentage
    );

    Ok(Json(report))
}
