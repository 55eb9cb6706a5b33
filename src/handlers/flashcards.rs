// src/handlers/flashcards.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    config::Config,
    error::AppError,
    models::flashcard::{FLASHCARD_FILES, SHARED_FILE, category_file},
    sources::{RemoteStore, load_all_flashcards, load_flashcards},
};

/// Query parameters for listing flashcards.
#[derive(Debug, Deserialize)]
pub struct FlashcardParams {
    pub category: Option<String>,
    pub q: Option<String>,
}

/// Lists flashcards, optionally narrowed to a category and a search keyword.
///
/// An unknown or missing category loads every file. Fetch failures yield no
/// cards rather than an error.
pub async fn list_flashcards(
    State(config): State<Config>,
    State(store): State<Arc<dyn RemoteStore>>,
    Query(params): Query<FlashcardParams>,
) -> Result<impl IntoResponse, AppError> {
    let path_for = |file: &str| format!("{}/{}", config.flashcard_prefix, file);

    let requested = params
        .category
        .map(|category| category.trim().to_lowercase())
        .filter(|category| !category.is_empty());

    let cards = match requested
        .as_deref()
        .and_then(|category| category_file(category).map(|file| (category, file)))
    {
        Some((category, file)) => {
            let cards = load_flashcards(store.as_ref(), &path_for(file)).await;
            if file == SHARED_FILE {
                cards
                    .into_iter()
                    .filter(|card| card.in_category(category))
                    .collect()
            } else {
                cards
            }
        }
        None => {
            let paths: Vec<String> = FLASHCARD_FILES.iter().map(|&file| path_for(file)).collect();
            load_all_flashcards(store.as_ref(), &paths).await
        }
    };

    let cards: Vec<_> = match params.q.as_deref().map(str::trim) {
        Some(query) if !query.is_empty() => cards
            .into_iter()
            .filter(|card| card.matches_query(query))
            .collect(),
        _ => cards,
    };

    Ok(Json(cards))
}
