// src/models/exam.rs

/// Where an exam's questions come from, relative to the bucket root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamSource {
    /// A full practice test served as-is.
    Single(&'static str),

    /// A mini quiz sampled from several practice tests.
    Mini(&'static [&'static str]),
}

const SAA_PT1: &str = "SAA/SAA%20PT1%20-%20PT%201.csv";
const SAA_PT3: &str = "SAA/SAA%20PT%203%20-%20PT3%20(1).csv";
const SAP_PT2: &str = "SAP/SAP%20PT2%20-%20Sheet1.csv";
const SAP_PT3: &str = "SAP/SAP%20PT%203%20-%20Sheet1.csv";
const SAP_PT3_ALT: &str = "SAP/SAP%20PT3%20-%20Sheet1.csv";

const SAA_MINI: &[&str] = &[SAA_PT1, SAA_PT3];
const SAP_MINI: &[&str] = &[SAP_PT2, SAP_PT3_ALT];

/// Every exam identifier accepted by the exam endpoint.
pub const EXAM_IDS: &[&str] = &["saa", "saa1", "saa3", "saa-mini", "sap", "sap2", "sap3", "sap-mini"];

pub fn exam_source(exam_id: &str) -> Option<ExamSource> {
    let source = match exam_id {
        "saa" | "saa1" => ExamSource::Single(SAA_PT1),
        "saa3" => ExamSource::Single(SAA_PT3),
        "sap" | "sap3" => ExamSource::Single(SAP_PT3),
        "sap2" => ExamSource::Single(SAP_PT2),
        "saa-mini" => ExamSource::Mini(SAA_MINI),
        "sap-mini" => ExamSource::Mini(SAP_MINI),
        _ => return None,
    };
    Some(source)
}

/// The mini quiz that follows an attempt of the given exam family.
pub fn mini_quiz_for(exam_type: &str) -> Option<&'static str> {
    if exam_type.starts_with("saa") {
        Some("saa-mini")
    } else if exam_type.starts_with("sap") {
        Some("sap-mini")
    } else {
        None
    }
}
