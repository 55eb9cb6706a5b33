// src/attempt.rs

//! In-progress exam state kept in a client-local key-value store.
//!
//! The store only ever holds JSON strings under the keys in [`keys`]. Values
//! that fail to parse read back as their empty default.

use std::collections::HashMap;

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    grading,
    models::{exam::mini_quiz_for, exam_record::ExamReport, question::QuestionRecord},
    utils::answer::encode_selection,
};

pub mod keys {
    pub const ANSWERS: &str = "answers";
    pub const FLAGS: &str = "flags";
    pub const CURRENT_INDEX: &str = "currentIndex";
    pub const QUESTIONS: &str = "testQuestions";
    pub const EXAM_TYPE: &str = "examType";
    pub const IS_MINI_QUIZ: &str = "isMiniQuiz";

    pub const ALL: &[&str] = &[ANSWERS, FLAGS, CURRENT_INDEX, QUESTIONS, EXAM_TYPE, IS_MINI_QUIZ];
}

/// String key-value storage, e.g. browser local storage.
pub trait AttemptStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AttemptStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Controller for one exam attempt on top of an [`AttemptStore`].
pub struct ExamAttempt<S: AttemptStore> {
    store: S,
}

impl<S: AttemptStore> ExamAttempt<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn read<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(raw) = self.store.get(key) else {
            return T::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Discarding unreadable attempt value {}: {}", key, e);
            T::default()
        })
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.store.set(key, raw),
            Err(e) => tracing::warn!("Failed to store attempt value {}: {}", key, e),
        }
    }

    /// Drops all attempt state.
    pub fn clear(&mut self) {
        for key in keys::ALL {
            self.store.remove(key);
        }
    }

    /// Starts a new attempt over the served question set, discarding any previous one.
    pub fn start(&mut self, exam_type: &str, questions: &[QuestionRecord], is_mini_quiz: bool) {
        self.clear();
        self.write(keys::EXAM_TYPE, &exam_type);
        self.write(keys::QUESTIONS, &questions);
        self.write(keys::IS_MINI_QUIZ, &is_mini_quiz);
        self.write(keys::CURRENT_INDEX, &0usize);
    }

    pub fn exam_type(&self) -> Option<String> {
        self.read::<Option<String>>(keys::EXAM_TYPE)
    }

    pub fn is_mini_quiz(&self) -> bool {
        self.read(keys::IS_MINI_QUIZ)
    }

    pub fn questions(&self) -> Vec<QuestionRecord> {
        self.read(keys::QUESTIONS)
    }

    pub fn answers(&self) -> HashMap<String, String> {
        self.read(keys::ANSWERS)
    }

    pub fn flags(&self) -> HashMap<String, bool> {
        self.read(keys::FLAGS)
    }

    pub fn current_index(&self) -> usize {
        self.read(keys::CURRENT_INDEX)
    }

    pub fn current_question(&self) -> Option<QuestionRecord> {
        self.questions().into_iter().nth(self.current_index())
    }

    /// Stores a selection for a question and returns its encoding.
    /// Order and case of the selected letters do not matter.
    pub fn record_answer(&mut self, question_id: &str, selection: &str) -> String {
        let encoded = encode_selection(selection);
        let mut answers = self.answers();
        answers.insert(question_id.to_string(), encoded.clone());
        self.write(keys::ANSWERS, &answers);
        encoded
    }

    /// Records a selection for the question at the current index.
    pub fn answer_current(&mut self, selection: &str) -> Option<String> {
        let index = self.current_index();
        let question = self.questions().into_iter().nth(index)?;
        Some(self.record_answer(&question.id_or(index), selection))
    }

    /// Flips the review flag of a question, returning the new state.
    pub fn toggle_flag(&mut self, question_id: &str) -> bool {
        let mut flags = self.flags();
        let flagged = !flags.get(question_id).copied().unwrap_or(false);
        flags.insert(question_id.to_string(), flagged);
        self.write(keys::FLAGS, &flags);
        flagged
    }

    /// Moves to `index`, clamped to the question set.
    pub fn go_to(&mut self, index: usize) -> usize {
        let last = self.questions().len().saturating_sub(1);
        let index = index.min(last);
        self.write(keys::CURRENT_INDEX, &index);
        index
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current_index() + 1)
    }

    pub fn previous(&mut self) -> usize {
        self.go_to(self.current_index().saturating_sub(1))
    }

    /// Grades the stored question set against the stored answers.
    pub fn finish(&self) -> ExamReport {
        grading::grade(
            &self.exam_type().unwrap_or_default(),
            &self.questions(),
            &self.answers(),
            &self.flags(),
        )
    }

    /// Exam identifier of the follow-up mini quiz for this attempt's exam family.
    pub fn next_mini_quiz_type(&self) -> Option<&'static str> {
        self.exam_type().as_deref().and_then(mini_quiz_for)
    }
}
