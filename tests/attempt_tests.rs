// tests/attempt_tests.rs

use std::collections::HashMap;

use cloudprep::{
    attempt::{AttemptStore, ExamAttempt, MemoryStore, keys},
    grading::{NO_ANSWER, NO_ANSWER_KEY, UNKNOWN_DOMAIN, grade, percentage, score_message},
    models::question::QuestionRecord,
};

fn question(fields: &[(&str, &str)]) -> QuestionRecord {
    fields.iter().copied().collect()
}

fn sample_set() -> Vec<QuestionRecord> {
    vec![
        question(&[
            ("Q#", "1"),
            ("Question", "Where do objects live?"),
            ("Option A", "Use S3"),
            ("Option B", "Use EBS"),
            ("Correct Letters", "A"),
            ("Domain", "Design Resilient Architectures"),
            ("Reference", "https://docs.aws.amazon.com/s3/"),
        ]),
        question(&[
            ("Q#", "2"),
            ("Question", "Pick two databases (Choose two)"),
            ("Option A", "Route 53"),
            ("Option B", "RDS"),
            ("Option C", "CloudFront"),
            ("Option D", "DynamoDB"),
            ("Correct Letters", "BD"),
            ("Domain", "https://docs.aws.amazon.com/AmazonRDS/latest/UserGuide/Welcome.html"),
        ]),
        question(&[("Q#", "3"), ("Question", "Sheet lost the key")]),
    ]
}

fn answers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(id, answer)| (id.to_string(), answer.to_string()))
        .collect()
}

#[test]
fn grading_counts_unscorable_questions_in_the_total() {
    let report = grade(
        "saa1",
        &sample_set(),
        &answers(&[("1", "A"), ("2", "DB"), ("3", "C")]),
        &HashMap::new(),
    );

    assert_eq!(report.score, 2);
    assert_eq!(report.total_questions, 3);
    assert_eq!(report.unscorable, 1);
    assert_eq!(report.percentage, 67);
    assert_eq!(report.message, "Not bad, but you need more study.");

    let lost = &report.review[2];
    assert!(!lost.is_correct);
    assert!(!lost.scorable);
    assert_eq!(lost.correct_answer, NO_ANSWER_KEY);
    assert_eq!(lost.user_answer, "C");
}

#[test]
fn review_resolves_answer_text_and_metadata() {
    let mut flags = HashMap::new();
    flags.insert("2".to_string(), true);

    let report = grade("saa1", &sample_set(), &answers(&[("2", "BD")]), &flags);

    let first = &report.review[0];
    assert_eq!(first.number, 1);
    assert_eq!(first.user_answer, NO_ANSWER);
    assert_eq!(first.correct_answer, "A - Use S3");
    assert_eq!(first.references.len(), 1);
    assert!(!first.flagged);

    let second = &report.review[1];
    assert!(second.is_correct);
    assert!(second.flagged);
    assert_eq!(second.expected_selections, 2);
    assert_eq!(second.user_answer, "B - RDS | D - DynamoDB");
    assert_eq!(second.domain.as_deref(), Some("Databases"));
}

#[test]
fn domain_breakdown_uses_cleaned_labels() {
    let report = grade(
        "saa1",
        &sample_set(),
        &answers(&[("1", "B"), ("2", "BD")]),
        &HashMap::new(),
    );

    let resilient = report.domain_breakdown["Design Resilient Architectures"];
    assert_eq!((resilient.correct, resilient.total), (0, 1));

    let databases = report.domain_breakdown["Databases"];
    assert_eq!((databases.correct, databases.total), (1, 1));

    let unknown = report.domain_breakdown[UNKNOWN_DOMAIN];
    assert_eq!((unknown.correct, unknown.total), (0, 1));
}

#[test]
fn questions_without_ids_are_matched_by_position() {
    let questions = vec![question(&[("Question", "No id"), ("Correct Letters", "C")])];
    let report = grade("sap", &questions, &answers(&[("0", "c")]), &HashMap::new());

    assert_eq!(report.score, 1);
    assert_eq!(report.review[0].question_id, "0");
}

#[test]
fn score_messages_follow_thresholds() {
    assert_eq!(percentage(0, 0), 0);
    assert_eq!(percentage(7, 8), 88);
    assert_eq!(score_message(80), "Excellent! You're well prepared for the exam.");
    assert_eq!(score_message(79), "Good job! Review the areas you missed.");
    assert_eq!(score_message(70), "Good job! Review the areas you missed.");
    assert_eq!(score_message(60), "Not bad, but you need more study.");
    assert_eq!(score_message(59), "Keep studying! Focus on the fundamentals.");
}

#[test]
fn attempt_round_trips_through_the_store() {
    let mut attempt = ExamAttempt::new(MemoryStore::new());
    attempt.start("saa-mini", &sample_set(), true);

    assert_eq!(attempt.exam_type().as_deref(), Some("saa-mini"));
    assert!(attempt.is_mini_quiz());
    assert_eq!(attempt.questions(), sample_set());
    assert_eq!(attempt.current_index(), 0);

    assert_eq!(attempt.record_answer("2", "db"), "BD");
    assert_eq!(attempt.answers()["2"], "BD");
}

#[test]
fn navigation_is_clamped() {
    let mut attempt = ExamAttempt::new(MemoryStore::new());
    attempt.start("saa1", &sample_set(), false);

    assert_eq!(attempt.previous(), 0);
    assert_eq!(attempt.next(), 1);
    assert_eq!(attempt.go_to(10), 2);
    assert_eq!(attempt.next(), 2);
    assert_eq!(attempt.current_question().unwrap().id_or(2), "3");
}

#[test]
fn flags_toggle() {
    let mut attempt = ExamAttempt::new(MemoryStore::new());
    attempt.start("saa1", &sample_set(), false);

    assert!(attempt.toggle_flag("1"));
    assert!(attempt.flags()["1"]);
    assert!(!attempt.toggle_flag("1"));
}

#[test]
fn finishing_grades_the_stored_attempt() {
    let mut attempt = ExamAttempt::new(MemoryStore::new());
    attempt.start("saa1", &sample_set(), false);

    attempt.answer_current("a");
    attempt.next();
    attempt.answer_current("DB");
    attempt.toggle_flag("2");

    let report = attempt.finish();
    assert_eq!(report.exam_type, "saa1");
    assert_eq!(report.score, 2);
    assert!(report.review[1].flagged);
    assert_eq!(attempt.next_mini_quiz_type(), Some("saa-mini"));
}

#[test]
fn starting_again_discards_previous_state() {
    let mut attempt = ExamAttempt::new(MemoryStore::new());
    attempt.start("sap2", &sample_set(), false);
    attempt.record_answer("1", "A");
    attempt.toggle_flag("1");
    attempt.go_to(2);

    attempt.start("sap-mini", &sample_set()[..1], true);
    assert!(attempt.answers().is_empty());
    assert!(attempt.flags().is_empty());
    assert_eq!(attempt.current_index(), 0);
    assert_eq!(attempt.questions().len(), 1);
    assert_eq!(attempt.next_mini_quiz_type(), Some("sap-mini"));
}

#[test]
fn clearing_removes_every_key() {
    let mut attempt = ExamAttempt::new(MemoryStore::new());
    attempt.start("saa1", &sample_set(), false);
    attempt.record_answer("1", "A");

    attempt.clear();
    let store = attempt.into_store();
    assert!(store.is_empty());
    for key in keys::ALL {
        assert!(store.get(key).is_none());
    }
}

#[test]
fn unreadable_values_read_as_empty() {
    let mut store = MemoryStore::new();
    store.set(keys::ANSWERS, "not json".to_string());
    store.set(keys::CURRENT_INDEX, "-3".to_string());

    let attempt = ExamAttempt::new(store);
    assert!(attempt.answers().is_empty());
    assert_eq!(attempt.current_index(), 0);
    assert!(attempt.exam_type().is_none());
}

#[test]
fn merged_sheets_with_repeated_ids_share_answers() {
    // Two practice tests both numbering from 1, as a mini quiz can serve them.
    let questions = vec![
        question(&[("Q#", "1"), ("Question", "From test one"), ("Correct Letters", "A")]),
        question(&[("Q#", "1"), ("Question", "From test three"), ("Correct Letters", "B")]),
    ];

    let mut attempt = ExamAttempt::new(MemoryStore::new());
    attempt.start("saa-mini", &questions, true);
    attempt.answer_current("A");
    attempt.toggle_flag("1");

    let report = attempt.finish();
    assert_eq!(report.review[0].user_answer, "A");
    assert_eq!(report.review[1].user_answer, "A");
    assert!(report.review[0].flagged && report.review[1].flagged);
    assert_eq!(report.score, 1);
}
