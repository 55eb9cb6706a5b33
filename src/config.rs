// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Number of questions served by a mini quiz.
pub const MINI_QUIZ_SIZE: usize = 10;

/// Upper bound on the services accepted by a single comparison request.
pub const MAX_COMPARE_SERVICES: usize = 100;

/// Display text longer than this is cut and suffixed with "...".
pub const DISPLAY_TRUNCATE_CHARS: usize = 60;

/// Stored answers longer than this are treated as already-resolved option text.
pub const FULL_TEXT_THRESHOLD: usize = 50;

const DEFAULT_BUCKET_URL: &str = "https://saapracticetests.sfo3.cdn.digitaloceanspaces.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    pub port: u16,
    /// Base URL of the object store holding exam CSVs and flashcard JSON files.
    pub exam_bucket_url: String,
    /// Key prefix of the flashcard files inside the bucket.
    pub flashcard_prefix: String,
    pub fetch_timeout_secs: u64,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let port = parse_or("PORT", 3000);

        let exam_bucket_url = env::var("EXAM_BUCKET_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_BUCKET_URL.to_string());

        let flashcard_prefix = env::var("FLASHCARD_PREFIX")
            .map(|prefix| prefix.trim_matches('/').to_string())
            .unwrap_or_else(|_| "Flashcards".to_string());

        let fetch_timeout_secs = parse_or("FETCH_TIMEOUT_SECS", 10);

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self {
            rust_log,
            port,
            exam_bucket_url,
            flashcard_prefix,
            fetch_timeout_secs,
            allowed_origins,
        }
    }
}

fn parse_or<T: std::str::FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid value {:?} for {}, using {}", raw, key, default);
            default
        }),
        Err(_) => default,
    }
}
