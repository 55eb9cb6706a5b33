// src/models/question.rs

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const OPTION_LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

const ID_KEYS: &[&str] = &["Q#", "id", "ID", "Question ID", "QID"];
const TEXT_KEYS: &[&str] = &["Question", "question", "Question Text"];
const CORRECT_KEYS: &[&str] = &["Correct Letters", "Correct Answer", "Correct Text", "Answer"];
const EXPLANATION_KEYS: &[&str] = &["Explanation", "explanation"];
const DOMAIN_KEYS: &[&str] = &["Domain", "domain"];
const REFERENCE_KEYS: &[&str] = &["Reference", "References", "reference"];
const OTHER_OPTIONS_KEYS: &[&str] = &["Other Options", "Options", "options"];
const CHOOSE_KEYS: &[&str] = &["Choose", "Select Count", "Num Answers"];
const TYPE_KEYS: &[&str] = &["Type", "Question Type", "type"];

/// Column spellings tried for each option letter, highest priority first.
const OPTION_KEY_TEMPLATES: &[&str] = &[
    "Option {}",
    "option {}",
    "OPTION {}",
    "Option{}",
    "Option_{}",
    "option_{}",
    "Answer {}",
    "answer {}",
    "Choice {}",
    "choice {}",
];

/// `A) text`, `B - text`, `C: text` or `D. text`, each ending at a newline or semicolon.
static INLINE_OPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[\s;])([A-F])\s*[).:\-]\s*([^\n;]+)").expect("valid inline option regex")
});

static CHOOSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:choose|select)\s+(\d+|two|three|four|five|six)\b")
        .expect("valid choose pattern")
});

/// One exam question as parsed from a remote sheet.
///
/// Sheets disagree on column names, so the record keeps every column as a
/// string and exposes typed accessors that try the known spellings in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct QuestionRecord(BTreeMap<String, String>);

impl From<BTreeMap<String, String>> for QuestionRecord {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self(fields)
    }
}

/// JSON scalars are kept as text; nulls are dropped.
impl From<BTreeMap<String, Value>> for QuestionRecord {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self(
            fields
                .into_iter()
                .filter_map(|(key, value)| match value {
                    Value::Null => None,
                    Value::String(s) => Some((key, s)),
                    other => Some((key, other.to_string())),
                })
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QuestionRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl QuestionRecord {
    /// Trimmed value of a column, `None` when absent or blank.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// First non-blank value among `keys`.
    pub fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key))
    }

    pub fn is_blank(&self) -> bool {
        self.0.values().all(|value| value.trim().is_empty())
    }

    /// Question identifier, or the position in the served set when the sheet has none.
    pub fn id_or(&self, index: usize) -> String {
        self.first_of(ID_KEYS)
            .map(str::to_string)
            .unwrap_or_else(|| index.to_string())
    }

    pub fn text(&self) -> Option<&str> {
        self.first_of(TEXT_KEYS)
    }

    /// Canonical answer key, usually sorted letters such as `"BD"`.
    pub fn correct_answer(&self) -> Option<&str> {
        self.first_of(CORRECT_KEYS)
    }

    pub fn explanation(&self) -> Option<&str> {
        self.first_of(EXPLANATION_KEYS)
    }

    pub fn domain(&self) -> Option<&str> {
        self.first_of(DOMAIN_KEYS)
    }

    pub fn reference(&self) -> Option<&str> {
        self.first_of(REFERENCE_KEYS)
    }

    pub fn other_options(&self) -> Option<&str> {
        self.first_of(OTHER_OPTIONS_KEYS)
    }

    /// Letter to option text.
    ///
    /// Per-letter columns are used when any of them is populated; otherwise the
    /// combined options column is scanned for inline `A) ...` markers.
    pub fn option_map(&self) -> BTreeMap<char, String> {
        let explicit: BTreeMap<char, String> = OPTION_LETTERS
            .iter()
            .filter_map(|&letter| {
                OPTION_KEY_TEMPLATES
                    .iter()
                    .find_map(|template| {
                        self.get(&template.replace("{}", &letter.to_string()))
                            .or_else(|| {
                                let lower = letter.to_ascii_lowercase().to_string();
                                self.get(&template.replace("{}", &lower))
                            })
                    })
                    .map(|text| (letter, text.to_string()))
            })
            .collect();

        if !explicit.is_empty() {
            return explicit;
        }

        let mut inline = BTreeMap::new();
        if let Some(combined) = self.other_options() {
            for caps in INLINE_OPTION.captures_iter(combined) {
                let letter = caps[1].chars().next().unwrap_or('A');
                let text = caps[2].trim();
                if !text.is_empty() {
                    inline.entry(letter).or_insert_with(|| text.to_string());
                }
            }
        }
        inline
    }

    /// How many options the question expects to be selected.
    ///
    /// Best effort: an explicit count column, then a "(choose N)" phrase in the
    /// text, then the length of a letter answer key, then 2 for questions typed
    /// as multi-select and 1 otherwise.
    pub fn selection_count(&self) -> usize {
        if let Some(n) = self
            .first_of(CHOOSE_KEYS)
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|n| *n > 0)
        {
            return n;
        }

        if let Some(n) = self.text().and_then(choose_count_in) {
            return n;
        }

        if let Some(letters) = self.correct_answer().and_then(letter_key_len) {
            return letters;
        }

        let multi = self
            .first_of(TYPE_KEYS)
            .is_some_and(|kind| kind.to_lowercase().contains("multi"));
        if multi { 2 } else { 1 }
    }
}

/// Number of letters in a key made only of option letters, e.g. `"BD"` -> 2.
fn letter_key_len(key: &str) -> Option<usize> {
    let letters: Vec<char> = key.chars().filter(|c| !c.is_whitespace()).collect();
    let is_letter_key = !letters.is_empty()
        && letters.len() <= OPTION_LETTERS.len()
        && letters
            .iter()
            .all(|c| OPTION_LETTERS.contains(&c.to_ascii_uppercase()));
    is_letter_key.then_some(letters.len())
}

fn choose_count_in(text: &str) -> Option<usize> {
    let caps = CHOOSE_PATTERN.captures(text)?;
    let word = caps[1].to_lowercase();
    let n = match word.as_str() {
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        digits => digits.parse().ok()?,
    };
    (n > 0).then_some(n)
}
