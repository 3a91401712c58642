//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - users(user_id, name, email, career_interests, current_skills, ...)
//! - career_paths(career_id, title, required_skills, description, duration_weeks)
//! - roadmaps(roadmap_id, user_id, career_id, steps, duration, created_at)

pub mod schema;
pub mod seed;
pub mod sqlite;

pub use seed::{SeedLoader, DEFAULT_SEED_PATH};
pub use sqlite::{CareerStore, DEFAULT_DATABASE_PATH};
