// src/models/exam_record.rs

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{models::question::QuestionRecord, utils::reference::ReferenceItem};

/// DTO for grading a finished attempt.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAttemptRequest {
    #[serde(default)]
    #[validate(length(max = 32))]
    pub exam_type: String,

    /// The question set originally served for this attempt.
    #[validate(length(min = 1, message = "No questions submitted"))]
    pub questions: Vec<QuestionRecord>,

    /// User's answers map.
    /// Key: question identifier
    /// Value: selected option letters, sorted (e.g. "BD")
    #[serde(default)]
    pub answers: HashMap<String, String>,

    /// Questions marked for review.
    #[serde(default)]
    pub flags: HashMap<String, bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainStats {
    pub correct: usize,
    pub total: usize,
}

/// Per-question line of the results review.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionReview {
    /// 1-based position in the served set.
    pub number: usize,
    pub question_id: String,
    pub question: String,
    pub is_correct: bool,
    /// False when the sheet carries no answer key for this question.
    pub scorable: bool,
    pub flagged: bool,
    pub expected_selections: usize,
    pub user_answer: String,
    pub correct_answer: String,
    pub explanation: String,
    pub domain: Option<String>,
    pub references: Vec<ReferenceItem>,
}

/// Graded attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamReport {
    pub exam_type: String,
    pub score: usize,
    pub total_questions: usize,
    pub unscorable: usize,
    pub percentage: u32,
    pub message: String,
    pub domain_breakdown: BTreeMap<String, DomainStats>,
    pub review: Vec<QuestionReview>,
    pub graded_at: DateTime<Utc>,
}
