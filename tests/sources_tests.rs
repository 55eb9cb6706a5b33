// tests/sources_tests.rs

use std::collections::HashMap;

use async_trait::async_trait;
use cloudprep::{
    error::AppError,
    sources::{
        RemoteStore, load_flashcards, load_merged, load_single, parse_flashcards,
        parse_questions, sample_questions,
    },
};
use rand::{SeedableRng, rngs::StdRng};

/// In-memory store; paths without a fixture fail like a 404 would.
struct FixtureStore {
    files: HashMap<&'static str, String>,
}

#[async_trait]
impl RemoteStore for FixtureStore {
    async fn fetch_text(&self, path: &str) -> Result<String, AppError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::UpstreamError(format!("Failed to fetch {}", path)))
    }
}

fn sheet(prefix: &str, rows: usize) -> String {
    let mut csv = String::from("Q#,Question,Option A,Option B,Correct Letters\n");
    for i in 1..=rows {
        csv.push_str(&format!("{prefix}-{i},Question {i},Yes,No,A\n"));
    }
    csv
}

fn ids(questions: &[cloudprep::models::question::QuestionRecord]) -> Vec<String> {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| q.id_or(i))
        .collect()
}

#[test]
fn parse_handles_quotes_bom_and_ragged_rows() {
    let csv = "\u{feff}Q#,Question,Option A,Option B,Correct Letters\n\
               1,\"Which, of these?\",Use S3,\"Multi\nline\",A\n\
               \n\
               ,,,,\n\
               2,Short row\n";

    let questions = parse_questions(csv).unwrap();
    assert_eq!(questions.len(), 2);

    let first = &questions[0];
    assert_eq!(first.id_or(0), "1");
    assert_eq!(first.text(), Some("Which, of these?"));
    assert_eq!(first.option_map()[&'B'], "Multi\nline");
    assert_eq!(first.correct_answer(), Some("A"));

    let second = &questions[1];
    assert_eq!(second.text(), Some("Short row"));
    assert!(second.option_map().is_empty());
    assert_eq!(second.correct_answer(), None);
}

#[test]
fn header_only_sheet_is_empty() {
    let questions = parse_questions("Q#,Question\n").unwrap();
    assert!(questions.is_empty());
}

#[tokio::test]
async fn single_source_failure_propagates() {
    let store = FixtureStore {
        files: HashMap::new(),
    };

    let err = load_single(&store, "missing.csv").await.unwrap_err();
    match err {
        AppError::UpstreamError(msg) => assert!(msg.contains("missing.csv")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn merged_load_skips_failed_sources() {
    let mut files = HashMap::new();
    files.insert("one.csv", sheet("one", 2));
    files.insert("three.csv", sheet("three", 3));
    let store = FixtureStore { files };

    let merged = load_merged(&store, &["one.csv", "two.csv", "three.csv"]).await;

    assert_eq!(
        ids(&merged),
        vec!["one-1", "one-2", "three-1", "three-2", "three-3"]
    );
}

#[tokio::test]
async fn merged_load_of_failing_sources_is_empty() {
    let store = FixtureStore {
        files: HashMap::new(),
    };
    assert!(load_merged(&store, &["a.csv", "b.csv"]).await.is_empty());
}

#[test]
fn sampling_truncates_and_is_reproducible_with_a_seed() {
    let pool = parse_questions(&sheet("q", 25)).unwrap();

    let first = sample_questions(pool.clone(), 10, &mut StdRng::seed_from_u64(7));
    let second = sample_questions(pool.clone(), 10, &mut StdRng::seed_from_u64(7));

    assert_eq!(first.len(), 10);
    assert_eq!(first, second);
    assert!(first.iter().all(|q| pool.contains(q)));

    let small = sample_questions(pool[..4].to_vec(), 10, &mut StdRng::seed_from_u64(1));
    assert_eq!(small.len(), 4);
}

#[test]
fn flashcards_tolerate_odd_documents() {
    assert!(parse_flashcards("{\"cards\": []}").unwrap().is_empty());
    assert!(parse_flashcards("not json").is_err());

    let cards = parse_flashcards(
        r#"[
            {"id": 1, "service": "S3", "category": "Storage", "front": "Q", "back": "A", "difficulty": "easy"},
            {"id": 2, "front": 5},
            {"front": "No id"}
        ]"#,
    )
    .unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].service.as_deref(), Some("S3"));
    assert_eq!(cards[0].extra["difficulty"], "easy");
    assert!(cards[1].id.is_null());
}

#[tokio::test]
async fn flashcard_fetch_failure_yields_no_cards() {
    let store = FixtureStore {
        files: HashMap::new(),
    };
    assert!(load_flashcards(&store, "Flashcards/Storage.json").await.is_empty());
}
