// src/grading.rs

use std::collections::{BTreeMap, HashMap};

use crate::{
    models::{
        exam_record::{DomainStats, ExamReport, QuestionReview},
        question::QuestionRecord,
    },
    utils::{
        answer::{is_correct, resolve_option_text},
        domain::clean_domain_label,
        reference::render_reference_links,
    },
};

pub const NO_ANSWER: &str = "No answer provided";
pub const NO_ANSWER_KEY: &str = "No correct answer data available";
pub const UNKNOWN_DOMAIN: &str = "Unknown";

/// Rounded score percentage, 0 for an empty attempt.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}

pub fn score_message(percentage: u32) -> &'static str {
    match percentage {
        80.. => "Excellent! You're well prepared for the exam.",
        70..=79 => "Good job! Review the areas you missed.",
        60..=69 => "Not bad, but you need more study.",
        _ => "Keep studying! Focus on the fundamentals.",
    }
}

/// Grades one attempt.
///
/// * Answers are matched to questions by identifier (position when the sheet has none).
/// * Questions without an answer key still count towards the total.
/// * Domain statistics are keyed by the cleaned domain label.
pub fn grade(
    exam_type: &str,
    questions: &[QuestionRecord],
    answers: &HashMap<String, String>,
    flags: &HashMap<String, bool>,
) -> ExamReport {
    let mut score = 0;
    let mut unscorable = 0;
    let mut domain_breakdown: BTreeMap<String, DomainStats> = BTreeMap::new();
    let mut review = Vec::with_capacity(questions.len());

    for (index, question) in questions.iter().enumerate() {
        let question_id = question.id_or(index);
        let user_answer = answers
            .get(&question_id)
            .map(|answer| answer.trim())
            .filter(|answer| !answer.is_empty());
        let answer_key = question.correct_answer();
        let domain = question.domain().map(clean_domain_label);

        let correct = match (user_answer, answer_key) {
            (Some(user), Some(key)) => is_correct(user, key),
            _ => false,
        };

        if answer_key.is_none() {
            unscorable += 1;
        }

        let stats = domain_breakdown
            .entry(domain.clone().unwrap_or_else(|| UNKNOWN_DOMAIN.to_string()))
            .or_default();
        stats.total += 1;
        if correct {
            score += 1;
            stats.correct += 1;
        }

        review.push(QuestionReview {
            number: index + 1,
            question: question.text().unwrap_or_default().to_string(),
            is_correct: correct,
            scorable: answer_key.is_some(),
            flagged: flags.get(&question_id).copied().unwrap_or(false),
            expected_selections: question.selection_count(),
            user_answer: user_answer
                .map(|answer| resolve_option_text(question, answer))
                .unwrap_or_else(|| NO_ANSWER.to_string()),
            correct_answer: answer_key
                .map(|key| resolve_option_text(question, key))
                .unwrap_or_else(|| NO_ANSWER_KEY.to_string()),
            explanation: question.explanation().unwrap_or_default().to_string(),
            domain,
            references: render_reference_links(question.reference()),
            question_id,
        });
    }

    let total_questions = questions.len();
    let percent = percentage(score, total_questions);

    ExamReport {
        exam_type: exam_type.to_string(),
        score,
        total_questions,
        unscorable,
        percentage: percent,
        message: score_message(percent).to_string(),
        domain_breakdown,
        review,
        graded_at: chrono::Utc::now(),
    }
}
