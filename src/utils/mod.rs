// src/utils/mod.rs

pub mod answer;
pub mod domain;
pub mod reference;
