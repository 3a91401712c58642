//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, params};
use crate::Result;
use crate::model::{CareerPathSummary, DbStats, NewCareerPath, NewUser};
use super::schema;
use super::seed::{SeedLoader, DEFAULT_SEED_PATH};

/// Default database location, relative to the working directory
pub const DEFAULT_DATABASE_PATH: &str = "data/career_roadmap.db";

/// SQLite-backed storage for users and career paths.
///
/// Owns a single connection for its whole lifetime. Every write autocommits,
/// except the seed batch which runs in one transaction.
pub struct CareerStore {
    conn: Connection,
}

impl CareerStore {
    /// Open a database file (creates it and its directory if they don't exist),
    /// then import sample career paths from the default seed file if the table is empty.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_seed(path, Path::new(DEFAULT_SEED_PATH))
    }

    /// Open a database file, seeding career paths from `seed_path` on first run
    pub fn open_with_seed(path: &Path, seed_path: &Path) -> Result<Self> {
        crate::config::ensure_db_dir(path)?;
        tracing::info!("Opening career database at {}", path.display());

        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        SeedLoader::new(seed_path).load_if_empty(&mut store)?;
        Ok(store)
    }

    /// Open an in-memory database (for testing). No seed data is loaded.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Release the connection. Never fails; close errors are logged and dropped.
    pub fn close(self) {
        if let Err((_conn, e)) = self.conn.close() {
            tracing::debug!("Ignoring error while closing database: {}", e);
        }
    }

    // ========== User Operations ==========

    /// Insert a user and return the assigned `user_id`
    pub fn insert_user(&self, user: &NewUser) -> Result<i64> {
        self.conn.execute(
            r#"
            INSERT INTO users (name, email, career_interests, current_skills, available_hours, experience_level, additional_info)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                user.name,
                user.email,
                user.career_interests,
                user.current_skills,
                user.available_hours,
                user.experience_level,
                user.additional_info,
            ],
        )?;
        let user_id = self.conn.last_insert_rowid();
        tracing::debug!("Inserted user {} ({})", user_id, user.email);
        Ok(user_id)
    }

    /// Count all users
    pub fn count_users(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ========== Career Path Operations ==========

    /// Insert a career path and return the assigned `career_id`
    pub fn insert_career_path(&self, path: &NewCareerPath) -> Result<i64> {
        insert_career_path_on(&self.conn, path)
    }

    /// Insert a batch of career paths in a single transaction.
    ///
    /// Either every row is committed or none is.
    pub fn insert_career_paths(&mut self, paths: &[NewCareerPath]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        for path in paths {
            insert_career_path_on(&tx, path)?;
        }
        tx.commit()?;
        Ok(paths.len())
    }

    /// Count all career paths
    pub fn count_career_paths(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM career_paths", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Estimate the number of skills across all career paths.
    ///
    /// Each non-null `required_skills` counts its `;` separators plus one.
    pub fn estimate_skill_count(&self) -> Result<usize> {
        let total: Option<i64> = self.conn.query_row(
            r#"
            SELECT SUM(LENGTH(required_skills) - LENGTH(REPLACE(required_skills, ';', '')) + 1)
            FROM career_paths
            WHERE required_skills IS NOT NULL
            "#,
            [],
            |row| row.get(0),
        )?;
        Ok(total.filter(|n| *n > 0).map(|n| n as usize).unwrap_or(0))
    }

    /// Get up to `limit` career paths in storage order
    pub fn sample_career_paths(&self, limit: usize) -> Result<Vec<CareerPathSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT career_id, title, required_skills, description, duration_weeks FROM career_paths LIMIT ?1"
        )?;

        let paths = stmt
            .query_map([limit as i64], |row| self.row_to_career_path(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(paths)
    }

    /// Helper to convert a row to a CareerPathSummary
    fn row_to_career_path(&self, row: &rusqlite::Row) -> rusqlite::Result<CareerPathSummary> {
        let duration_weeks: Option<i64> = row.get(4)?;
        Ok(CareerPathSummary {
            career_id: row.get(0)?,
            title: row.get(1)?,
            required_skills: row.get(2)?,
            description: row.get(3)?,
            duration_weeks: duration_weeks.unwrap_or(0),
        })
    }

    /// Get database statistics
    pub fn database_stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            users: self.count_users()?,
            career_paths: self.count_career_paths()?,
            skills: self.estimate_skill_count()?,
        })
    }
}

fn insert_career_path_on(conn: &Connection, path: &NewCareerPath) -> Result<i64> {
    conn.execute(
        r#"
        INSERT INTO career_paths (title, required_skills, description, duration_weeks)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![
            path.title,
            path.required_skills,
            path.description,
            path.duration_weeks,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
