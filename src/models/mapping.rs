// src/models/mapping.rs

use serde::{Deserialize, Serialize};

/// Qualitative migration effort bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Easy,
    Medium,
    Hard,
}

/// Provenance of an open-source table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlternativeKind {
    #[serde(rename = "Open Source")]
    OpenSource,
    #[serde(rename = "Self-Hosted")]
    SelfHosted,
    #[serde(rename = "Alternative Platform")]
    AlternativePlatform,
}

/// Provenance tag attached to every comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComparisonKind {
    #[serde(rename = "DO Product")]
    DoProduct,
    #[serde(rename = "Open Source")]
    OpenSource,
    #[serde(rename = "Self-Hosted")]
    SelfHosted,
    #[serde(rename = "Alternative Platform")]
    AlternativePlatform,
}

impl From<AlternativeKind> for ComparisonKind {
    fn from(kind: AlternativeKind) -> Self {
        match kind {
            AlternativeKind::OpenSource => ComparisonKind::OpenSource,
            AlternativeKind::SelfHosted => ComparisonKind::SelfHosted,
            AlternativeKind::AlternativePlatform => ComparisonKind::AlternativePlatform,
        }
    }
}

/// A DigitalOcean product that replaces an AWS service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMapping {
    pub target_product: String,
    pub description: String,
    pub features: Vec<String>,
    pub pricing_note: String,
    pub migration_complexity: Complexity,

    /// 1 (trivial) to 10 (rewrite).
    pub migration_difficulty: u8,
    pub use_cases: Vec<String>,
    pub source_docs_url: String,
    pub target_docs_url: String,
    pub key_differences: Vec<String>,
}

/// An open-source or self-hosted replacement for an AWS service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSourceMapping {
    pub alternative_name: String,
    pub description: String,
    pub kind: AlternativeKind,
    pub category: String,
    pub features: Vec<String>,
    pub source_docs_url: String,
    pub alternative_docs_url: String,
    pub key_differences: Vec<String>,
    pub use_cases: Vec<String>,
}

/// Borrowed view of whichever table entry a service resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Alternative<'a> {
    Product(&'a ServiceMapping),
    OpenSource(&'a OpenSourceMapping),
}

impl Alternative<'_> {
    /// Difficulty score, only carried by first-party mappings.
    pub fn migration_difficulty(&self) -> Option<u8> {
        match self {
            Alternative::Product(mapping) => Some(mapping.migration_difficulty),
            Alternative::OpenSource(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult<'a> {
    pub service: String,
    #[serde(rename = "type")]
    pub kind: ComparisonKind,
    pub mapping: Alternative<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexitySummary {
    pub overall: Complexity,
    pub average_difficulty: f64,
}

/// One entry of the known-services listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceEntry {
    pub service: String,
    #[serde(rename = "type")]
    pub kind: ComparisonKind,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse<'a> {
    pub recommendations: Vec<ComparisonResult<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<ComplexitySummary>,
    pub total_services: usize,
    pub mapped_services: usize,
}
