//! Database schema definitions

/// SQL to create the users table
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    email TEXT,
    career_interests TEXT,
    current_skills TEXT,
    available_hours TEXT,
    experience_level TEXT,
    additional_info TEXT,
    created_at TEXT DEFAULT (datetime('now'))
)
"#;

/// SQL to create the career_paths table
/// `required_skills` is a single semicolon-delimited text field
pub const CREATE_CAREER_PATHS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS career_paths (
    career_id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT,
    required_skills TEXT,
    description TEXT,
    duration_weeks INTEGER
)
"#;

/// SQL to create the roadmaps table
/// Nothing reads or writes roadmaps yet; the table is kept for schema compatibility
pub const CREATE_ROADMAPS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS roadmaps (
    roadmap_id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER,
    career_id INTEGER,
    steps TEXT,
    duration INTEGER,
    created_at TEXT DEFAULT (datetime('now')),
    FOREIGN KEY(user_id) REFERENCES users(user_id),
    FOREIGN KEY(career_id) REFERENCES career_paths(career_id)
)
"#;

/// All schema creation statements, in dependency order
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![
        CREATE_USERS_TABLE,
        CREATE_CAREER_PATHS_TABLE,
        CREATE_ROADMAPS_TABLE,
    ]
}

/// Names of the tables the schema creates
pub const TABLE_NAMES: &[&str] = &["users", "career_paths", "roadmaps"];
