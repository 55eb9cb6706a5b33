// src/utils/reference.rs

use serde::Serialize;
use url::form_urlencoded;

use crate::config::DISPLAY_TRUNCATE_CHARS;

/// Documentation hosts that are safe to link even without a scheme.
const DOC_HOSTS: &[&str] = &["aws.amazon.com", "docs.aws", "digitalocean.com"];

const SEARCH_URL: &str = "https://www.google.com/search?q=";

/// One renderable piece of a question's reference field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ReferenceItem {
    /// Clickable link; `label` may be shortened, `href` never is.
    Link { href: String, label: String },

    /// Value cut short upstream. Not a usable URL, so a search link is offered instead.
    Truncated {
        text: String,
        #[serde(rename = "searchUrl")]
        search_url: String,
    },

    Text { text: String },
}

/// Shortens display text to the configured width, marking the cut with "...".
pub fn truncate_display(text: &str) -> String {
    if text.chars().count() > DISPLAY_TRUNCATE_CHARS {
        let head: String = text.chars().take(DISPLAY_TRUNCATE_CHARS).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

fn is_truncated(segment: &str) -> bool {
    segment.contains("...") || segment.contains('\u{2026}')
}

fn search_link(segment: &str) -> String {
    let query = segment.replace("...", " ").replace('\u{2026}', " ");
    let query = query.split_whitespace().collect::<Vec<_>>().join(" ");
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{}{}", SEARCH_URL, encoded)
}

fn classify(segment: String) -> ReferenceItem {
    if is_truncated(&segment) {
        let search_url = search_link(&segment);
        return ReferenceItem::Truncated {
            text: segment,
            search_url,
        };
    }

    let lower = segment.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return ReferenceItem::Link {
            label: truncate_display(&segment),
            href: segment,
        };
    }

    if lower.starts_with("www.") {
        return ReferenceItem::Link {
            label: truncate_display(&segment),
            href: format!("https://{}", segment),
        };
    }

    if DOC_HOSTS.iter().any(|host| lower.contains(host)) {
        return ReferenceItem::Link {
            label: truncate_display(&segment),
            href: format!("https://{}", segment.trim_start_matches('/')),
        };
    }

    ReferenceItem::Text {
        text: truncate_display(&segment),
    }
}

/// Splits a reference field into links and text.
///
/// The field is split on the first separator present among `;`, `,` and a
/// newline, in that order of preference.
pub fn render_reference_links(raw: Option<&str>) -> Vec<ReferenceItem> {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return Vec::new();
    };

    let segments: Vec<&str> = match [';', ',', '\n'].into_iter().find(|sep| raw.contains(*sep)) {
        Some(sep) => raw.split(sep).collect(),
        None => vec![raw],
    };

    segments
        .into_iter()
        .map(|segment| segment.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|segment| !segment.is_empty())
        .map(classify)
        .collect()
}
