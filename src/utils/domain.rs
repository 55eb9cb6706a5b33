// src/utils/domain.rs

use url::Url;

/// Keyword found in a documentation path or raw domain value, and its label.
/// Checked in order, first match wins.
const DOMAIN_KEYWORDS: &[(&str, &str)] = &[
    ("resilient", "Design Resilient Architectures"),
    ("high-performing", "Design High-Performing Architectures"),
    ("secure", "Design Secure Architectures"),
    ("cost-optimized", "Design Cost-Optimized Architectures"),
    ("operational-excellence", "Design Operational Excellence"),
    ("s3", "Storage & Data Management"),
    ("ec2", "Compute"),
    ("vpc", "Networking & Content Delivery"),
    ("rds", "Databases"),
    ("waf", "Security & Compliance"),
    ("cloudfront", "Content Delivery"),
    ("iam", "Security & Compliance"),
    ("organizations", "Governance & Management"),
];

/// Hosts that mark a segment as an AWS documentation URL.
const AWS_DOC_HOSTS: &[&str] = &["aws.amazon.com", "docs.aws"];

fn keyword_label(haystack: &str) -> Option<&'static str> {
    DOMAIN_KEYWORDS
        .iter()
        .find(|(keyword, _)| haystack.contains(keyword))
        .map(|(_, label)| *label)
}

/// Capitalizes each hyphen-separated word: `"elastic-load-balancing"` -> `"Elastic Load Balancing"`.
pub fn titleize(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn label_from_path(path: &str) -> String {
    if let Some(label) = keyword_label(&path.to_lowercase()) {
        return label.to_string();
    }

    let last = path
        .split('/')
        .filter(|part| !part.is_empty())
        .last()
        .unwrap_or("AWS Service");
    titleize(last)
}

/// Maps a raw domain value to a readable category.
///
/// Clean labels pass through. Values holding an AWS documentation URL are
/// classified by the URL path, anything else by keyword, and unrecognized
/// values are returned unchanged.
pub fn clean_domain_label(raw: &str) -> String {
    if raw.starts_with(|c: char| c.is_ascii_uppercase()) && !raw.contains("http") {
        return raw.to_string();
    }

    let doc_segment = raw
        .split(';')
        .map(str::trim)
        .find(|segment| AWS_DOC_HOSTS.iter().any(|host| segment.contains(host)));

    if let Some(segment) = doc_segment {
        let candidate = if segment.contains("://") {
            segment.to_string()
        } else {
            format!("https://{}", segment.trim_start_matches('/'))
        };

        return match Url::parse(&candidate) {
            Ok(url) => label_from_path(url.path()),
            Err(e) => {
                tracing::debug!("Unparseable domain URL {:?}: {}", segment, e);
                raw.to_string()
            }
        };
    }

    keyword_label(&raw.to_lowercase())
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_string())
}
