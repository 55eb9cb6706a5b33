// src/models/flashcard.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// File holding the cards of more than one category.
pub const SHARED_FILE: &str = "csvjson.json";

/// Every flashcard file, fetched together when no category is requested.
pub const FLASHCARD_FILES: &[&str] = &[
    SHARED_FILE,
    "Monitoring.json",
    "Networking.json",
    "Security.json",
    "Storage.json",
    "Database.json",
    "Compute.json",
];

const CATEGORY_FILES: &[(&str, &str)] = &[
    ("devops", SHARED_FILE),
    ("disaster recovery", SHARED_FILE),
    ("monitoring", "Monitoring.json"),
    ("networking", "Networking.json"),
    ("security", "Security.json"),
    ("storage", "Storage.json"),
    ("database", "Database.json"),
    ("compute", "Compute.json"),
];

/// File for a lowercased category name.
pub fn category_file(category: &str) -> Option<&'static str> {
    CATEGORY_FILES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, file)| *file)
}

/// One study card. Unknown columns are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub front: String,
    #[serde(default)]
    pub back: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Flashcard {
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|own| own.eq_ignore_ascii_case(category))
    }

    /// Case-insensitive search over front, back and service.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.front.to_lowercase().contains(&query)
            || self.back.to_lowercase().contains(&query)
            || self
                .service
                .as_deref()
                .is_some_and(|service| service.to_lowercase().contains(&query))
    }
}
