// src/lib.rs

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;

// The sanitizer entry points are used directly by the page renderer.
pub use routes::create_router;
pub use utils::html::{SafeHtml, sanitize, sanitize_opt};
