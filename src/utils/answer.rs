// src/utils/answer.rs

//! Answer encoding, correctness and display helpers.
//!
//! Answers are stored as the sorted, uppercased letters of the selected
//! options (`"BD"`). Multi-select answers are sets, so both sides are
//! order-normalized before comparing.

use std::collections::BTreeSet;

use crate::{
    config::FULL_TEXT_THRESHOLD,
    models::question::{OPTION_LETTERS, QuestionRecord},
};

/// Separator between a letter and its option text.
pub const LETTER_SEPARATOR: &str = " - ";

/// Separator between resolved options of a multi-letter answer.
pub const OPTION_JOINER: &str = " | ";

/// Encodes a selection as sorted, deduplicated, uppercased option letters.
/// Anything that is not an option letter is ignored.
pub fn encode_selection(selected: &str) -> String {
    selected
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| OPTION_LETTERS.contains(c))
        .collect::<BTreeSet<char>>()
        .into_iter()
        .collect()
}

/// Trims, uppercases and sorts the characters of an answer.
pub fn normalize_answer(answer: &str) -> String {
    let mut chars: Vec<char> = answer.trim().to_uppercase().chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Exact match after normalization. A blank answer is never correct.
pub fn is_correct(user_answer: &str, correct_answer: &str) -> bool {
    let user = normalize_answer(user_answer);
    !user.is_empty() && user == normalize_answer(correct_answer)
}

fn is_option_letter(c: char) -> bool {
    OPTION_LETTERS.contains(&c.to_ascii_uppercase())
}

/// Turns a stored answer into display text pairing letters with option text.
///
/// `"A"` becomes `"A - Use S3"`, `"AC"` becomes `"A - Use S3 | C - Use EC2"`.
/// Text that is already resolved, long, or not a letter encoding is returned as is.
pub fn resolve_option_text(question: &QuestionRecord, answer: &str) -> String {
    if answer.contains(LETTER_SEPARATOR) {
        return answer.to_string();
    }

    if answer.chars().count() > FULL_TEXT_THRESHOLD {
        return answer.to_string();
    }

    let options = question.option_map();
    let resolve = |letter: char| {
        let upper = letter.to_ascii_uppercase();
        match options.get(&upper) {
            Some(text) => format!("{}{}{}", upper, LETTER_SEPARATOR, text),
            None => letter.to_string(),
        }
    };

    let mut chars = answer.chars();
    if let (Some(only), None) = (chars.next(), chars.next()) {
        return if is_option_letter(only) {
            resolve(only)
        } else {
            answer.to_string()
        };
    }

    let letters = answer.trim();
    let count = letters.chars().count();
    if (1..=5).contains(&count) && letters.chars().all(is_option_letter) {
        return letters
            .chars()
            .map(resolve)
            .collect::<Vec<_>>()
            .join(OPTION_JOINER);
    }

    answer.to_string()
}
