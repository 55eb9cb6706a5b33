// src/handlers/mod.rs

pub mod compare;
pub mod exam;
pub mod flashcards;
pub mod results;
