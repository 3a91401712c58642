//! # Careerpath - career roadmap helper
//!
//! Collects a user's career interests, persists them to a local SQLite store,
//! and suggests a sequence of next steps.
//!
//! Careerpath provides:
//! - SQLite-backed storage for users, career paths and roadmaps
//! - One-time import of sample career paths from a CSV seed file
//! - A keyword-matching recommender over a static career map
//! - An interactive prompt flow for collecting user details

pub mod model;
pub mod storage;
pub mod recommender;
pub mod prompt;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use model::{CareerPathSummary, DbStats, NewCareerPath, NewUser};
pub use recommender::{Recommendation, generate_career_path};
pub use storage::CareerStore;

/// Result type alias for Careerpath operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Careerpath operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
