//! One-time import of sample career paths from a CSV seed file
//!
//! The seed file is optional and may use any of several column spellings:
//! - title: `title`, `career`, `job_title` (default `"Unknown"`)
//! - skills: `skill_list`, `skills` (default empty)
//! - description: `description` (default empty)
//! - duration: `avg_duration_months`, `duration_months` (months, stored as weeks)
//!
//! Loading is fail-open: a missing, unreadable or malformed seed file never
//! stops the store from opening.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use csv::StringRecord;
use crate::Result;
use crate::model::NewCareerPath;
use super::sqlite::CareerStore;

/// Default seed file location, relative to the working directory
pub const DEFAULT_SEED_PATH: &str = "data/sample_career_map.csv";

const TITLE_COLUMNS: &[&str] = &["title", "career", "job_title"];
const SKILL_COLUMNS: &[&str] = &["skill_list", "skills"];
const DESCRIPTION_COLUMNS: &[&str] = &["description"];
const DURATION_COLUMNS: &[&str] = &["avg_duration_months", "duration_months"];

const UNKNOWN_TITLE: &str = "Unknown";
const WEEKS_PER_MONTH: f64 = 4.0;

/// Loads sample career paths into an empty store
#[derive(Debug, Clone)]
pub struct SeedLoader {
    path: PathBuf,
}

impl SeedLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Import the seed file if the career_paths table is empty.
    ///
    /// Returns the number of rows imported. Only the emptiness check can fail;
    /// every error while reading or inserting seed rows is logged and discarded.
    pub fn load_if_empty(&self, store: &mut CareerStore) -> Result<usize> {
        if store.count_career_paths()? > 0 {
            tracing::debug!("Career paths already present, skipping seed import");
            return Ok(0);
        }

        match self.load(store) {
            Ok(count) => Ok(count),
            Err(e) => {
                tracing::warn!("Ignoring seed file {}: {}", self.path.display(), e);
                Ok(0)
            }
        }
    }

    fn load(&self, store: &mut CareerStore) -> Result<usize> {
        if !self.path.exists() {
            tracing::debug!("No seed file at {}", self.path.display());
            return Ok(0);
        }

        let rows = read_seed_rows(File::open(&self.path)?)?;
        let count = store.insert_career_paths(&rows)?;
        tracing::info!("Imported {} career paths from {}", count, self.path.display());
        Ok(count)
    }
}

/// Parse CSV seed data into career path rows.
///
/// Short records are tolerated; their missing columns fall back to defaults.
pub fn read_seed_rows<R: Read>(reader: R) -> Result<Vec<NewCareerPath>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record_to_career_path(&headers, &record));
    }
    Ok(rows)
}

fn record_to_career_path(headers: &StringRecord, record: &StringRecord) -> NewCareerPath {
    let title = first_non_empty(headers, record, TITLE_COLUMNS).unwrap_or(UNKNOWN_TITLE);
    let skills = first_non_empty(headers, record, SKILL_COLUMNS).unwrap_or_default();
    let description = first_non_empty(headers, record, DESCRIPTION_COLUMNS).unwrap_or_default();
    let duration_weeks = first_non_empty(headers, record, DURATION_COLUMNS).and_then(months_to_weeks);

    NewCareerPath {
        title: title.to_string(),
        required_skills: Some(skills.to_string()),
        description: description.to_string(),
        duration_weeks,
    }
}

/// Value of the first candidate column that is present and non-blank
fn first_non_empty<'r>(
    headers: &StringRecord,
    record: &'r StringRecord,
    candidates: &[&str],
) -> Option<&'r str> {
    candidates.iter().find_map(|name| {
        let idx = headers.iter().position(|h| h.trim() == *name)?;
        record.get(idx).filter(|v| !v.trim().is_empty())
    })
}

/// Convert a month count to whole weeks, truncating.
///
/// Unparseable, non-finite and zero values mean "no duration".
fn months_to_weeks(raw: &str) -> Option<i64> {
    let months: f64 = raw.trim().parse().ok()?;
    if !months.is_finite() || months == 0.0 {
        return None;
    }
    Some((months * WEEKS_PER_MONTH).trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_seed(dir: &Path, contents: &[u8]) -> PathBuf {
        let path = dir.join("sample_career_map.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    fn seeded_store(contents: &[u8]) -> (CareerStore, usize) {
        let dir = tempfile::tempdir().unwrap();
        let seed = write_seed(dir.path(), contents);
        let mut store = CareerStore::open_in_memory().unwrap();
        let count = SeedLoader::new(seed).load_if_empty(&mut store).unwrap();
        (store, count)
    }

    #[test]
    fn test_nurse_row_converts_months_to_weeks() {
        let (store, count) =
            seeded_store(b"title,skills,avg_duration_months\nNurse,care;triage,6\n");
        assert_eq!(count, 1);

        let paths = store.sample_career_paths(10).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].title.as_deref(), Some("Nurse"));
        assert_eq!(paths[0].required_skills.as_deref(), Some("care;triage"));
        assert_eq!(paths[0].duration_weeks, 24);
        assert_eq!(store.estimate_skill_count().unwrap(), 2);
    }

    #[test]
    fn test_missing_seed_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CareerStore::open_in_memory().unwrap();

        let loader = SeedLoader::new(dir.path().join("does_not_exist.csv"));
        assert_eq!(loader.load_if_empty(&mut store).unwrap(), 0);
        assert_eq!(store.count_career_paths().unwrap(), 0);
    }

    #[test]
    fn test_bad_duration_becomes_null_and_other_rows_load() {
        let (store, count) = seeded_store(
            b"title,skills,avg_duration_months\nNurse,care,six\nWelder,welding,3\n",
        );
        assert_eq!(count, 2);

        let null_durations: i64 = store_query(&store, "SELECT COUNT(*) FROM career_paths WHERE duration_weeks IS NULL");
        assert_eq!(null_durations, 1);

        let paths = store.sample_career_paths(10).unwrap();
        assert_eq!(paths[0].duration_weeks, 0);
        assert_eq!(paths[1].duration_weeks, 12);
    }

    #[test]
    fn test_fallback_columns_and_defaults() {
        let (store, _) = seeded_store(
            b"career,job_title,skill_list,duration_months\nPilot,Ignored,flying;radio,1.9\n,Chef,,\n",
        );

        let paths = store.sample_career_paths(10).unwrap();
        assert_eq!(paths.len(), 2);

        assert_eq!(paths[0].title.as_deref(), Some("Pilot"));
        assert_eq!(paths[0].required_skills.as_deref(), Some("flying;radio"));
        assert_eq!(paths[0].description.as_deref(), Some(""));
        assert_eq!(paths[0].duration_weeks, 7);

        assert_eq!(paths[1].title.as_deref(), Some("Chef"));
        assert_eq!(paths[1].required_skills.as_deref(), Some(""));
        assert_eq!(paths[1].duration_weeks, 0);
    }

    #[test]
    fn test_unknown_title_when_no_title_column() {
        let rows = read_seed_rows("description\nSomething useful\n".as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Unknown");
        assert_eq!(rows[0].description, "Something useful");
        assert_eq!(rows[0].duration_weeks, None);
    }

    #[test]
    fn test_short_records_are_tolerated() {
        let rows = read_seed_rows("title,skills,description\nNurse\n".as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Nurse");
        assert_eq!(rows[0].required_skills.as_deref(), Some(""));
    }

    #[test]
    fn test_months_to_weeks() {
        assert_eq!(months_to_weeks("6"), Some(24));
        assert_eq!(months_to_weeks(" 1.5 "), Some(6));
        assert_eq!(months_to_weeks("2.9"), Some(11));
        assert_eq!(months_to_weeks("0"), None);
        assert_eq!(months_to_weeks("NaN"), None);
        assert_eq!(months_to_weeks("a while"), None);
    }

    #[test]
    fn test_malformed_file_is_swallowed() {
        let (store, count) = seeded_store(b"title,skills\nNurse,care\n\xff\xfe,broken\n");
        assert_eq!(count, 0);
        assert_eq!(store.count_career_paths().unwrap(), 0);
    }

    #[test]
    fn test_seed_skipped_when_table_has_rows() {
        let dir = tempfile::tempdir().unwrap();
        let seed = write_seed(dir.path(), b"title\nNurse\n");
        let mut store = CareerStore::open_in_memory().unwrap();
        store.insert_career_path(&NewCareerPath::new("Existing", None)).unwrap();

        assert_eq!(SeedLoader::new(seed).load_if_empty(&mut store).unwrap(), 0);
        assert_eq!(store.count_career_paths().unwrap(), 1);
    }

    #[test]
    fn test_reopen_does_not_duplicate_seed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let seed = write_seed(dir.path(), b"title,skills\nNurse,care\nWelder,welding\n");
        let db = dir.path().join("data").join("career.db");

        CareerStore::open_with_seed(&db, &seed).unwrap().close();
        let store = CareerStore::open_with_seed(&db, &seed).unwrap();
        assert_eq!(store.count_career_paths().unwrap(), 2);
    }

    fn store_query(store: &CareerStore, sql: &str) -> i64 {
        store.connection().query_row(sql, [], |row| row.get(0)).unwrap()
    }
}
