// src/sources.rs

//! Remote exam sheets and flashcard files.
//!
//! Single-source loads propagate failures. Multi-source loads fetch every
//! source concurrently and replace a failed source with an empty set, so one
//! bad file never takes down the whole response.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use rand::{Rng, seq::SliceRandom};
use serde_json::Value;

use crate::{
    config::Config,
    error::AppError,
    models::{flashcard::Flashcard, question::QuestionRecord},
};

/// Read-only object storage holding the exam data.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetches the object at `path`, relative to the store root.
    async fn fetch_text(&self, path: &str) -> Result<String, AppError>;
}

/// `RemoteStore` over plain HTTP(S), e.g. a Spaces CDN endpoint.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            config.exam_bucket_url.clone(),
            Duration::from_secs(config.fetch_timeout_secs),
        )
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl RemoteStore for HttpStore {
    async fn fetch_text(&self, path: &str) -> Result<String, AppError> {
        let url = self.url_for(path);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamError(format!(
                "Failed to fetch {} ({})",
                url,
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}

/// Parses a question sheet. The header row names the columns.
///
/// Blank rows are skipped and short rows simply lack their trailing columns.
pub fn parse_questions(csv_text: &str) -> Result<Vec<QuestionRecord>, AppError> {
    let text = csv_text.strip_prefix('\u{feff}').unwrap_or(csv_text);
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut questions = Vec::new();

    for row in reader.records() {
        let row = row?;
        let question: QuestionRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header.trim(), value))
            .filter(|(header, _)| !header.is_empty())
            .collect();

        if !question.is_blank() {
            questions.push(question);
        }
    }

    Ok(questions)
}

pub async fn load_single(
    store: &dyn RemoteStore,
    path: &str,
) -> Result<Vec<QuestionRecord>, AppError> {
    let text = store.fetch_text(path).await?;
    parse_questions(&text)
}

/// Loads every source concurrently and concatenates them in `paths` order.
pub async fn load_merged(store: &dyn RemoteStore, paths: &[&str]) -> Vec<QuestionRecord> {
    let loads = paths.iter().map(|path| async move {
        match load_single(store, path).await {
            Ok(questions) => questions,
            Err(e) => {
                tracing::warn!("Skipping exam source {}: {}", path, e);
                Vec::new()
            }
        }
    });

    join_all(loads).await.into_iter().flatten().collect()
}

/// Random permutation of `questions`, cut to at most `count`.
pub fn sample_questions<R: Rng + ?Sized>(
    mut questions: Vec<QuestionRecord>,
    count: usize,
    rng: &mut R,
) -> Vec<QuestionRecord> {
    questions.shuffle(rng);
    questions.truncate(count);
    questions
}

/// Parses a flashcard file. Anything but a JSON array yields no cards.
pub fn parse_flashcards(json_text: &str) -> Result<Vec<Flashcard>, AppError> {
    let parsed = serde_json::from_str::<Value>(json_text)
        .map_err(|e| AppError::UpstreamError(format!("Invalid flashcard JSON: {}", e)))?;

    let cards = match parsed {
        Value::Array(cards) => cards,
        _ => return Ok(Vec::new()),
    };

    Ok(cards
        .into_iter()
        .filter_map(|card| match serde_json::from_value(card) {
            Ok(card) => Some(card),
            Err(e) => {
                tracing::warn!("Dropping malformed flashcard: {}", e);
                None
            }
        })
        .collect())
}

/// Loads one flashcard file, degrading to no cards on any failure.
pub async fn load_flashcards(store: &dyn RemoteStore, path: &str) -> Vec<Flashcard> {
    let result = match store.fetch_text(path).await {
        Ok(text) => parse_flashcards(&text),
        Err(e) => Err(e),
    };

    result.unwrap_or_else(|e| {
        tracing::warn!("Failed to load flashcards from {}: {}", path, e);
        Vec::new()
    })
}

pub async fn load_all_flashcards(store: &dyn RemoteStore, paths: &[String]) -> Vec<Flashcard> {
    let loads = paths.iter().map(|path| load_flashcards(store, path));
    join_all(loads).await.into_iter().flatten().collect()
}
