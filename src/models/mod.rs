// src/models/mod.rs

pub mod exam;
pub mod exam_record;
pub mod flashcard;
pub mod mapping;
pub mod question;
