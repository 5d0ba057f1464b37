// src/models/mod.rs

pub mod health;
pub mod inline;
pub mod markup;
