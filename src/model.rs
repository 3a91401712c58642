//! Record types stored in and read back from the career database
//!
//! - `NewUser`: a user row ready for insertion (id and timestamp set by DB)
//! - `NewCareerPath`: a career path row ready for insertion
//! - `CareerPathSummary`: a career path as returned to callers
//! - `DbStats`: aggregate counts over the store

use serde::{Deserialize, Serialize};

/// A user's career-interest profile, ready for insertion.
///
/// All fields are free text and are stored as given; nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub career_interests: String,
    pub current_skills: String,
    pub available_hours: String,
    pub experience_level: String,
    pub additional_info: Option<String>,
}

impl NewUser {
    /// Create a new user profile with no additional notes
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        career_interests: impl Into<String>,
        current_skills: impl Into<String>,
        available_hours: impl Into<String>,
        experience_level: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            career_interests: career_interests.into(),
            current_skills: current_skills.into(),
            available_hours: available_hours.into(),
            experience_level: experience_level.into(),
            additional_info: None,
        }
    }

    /// Attach free-text notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.additional_info = Some(notes.into());
        self
    }
}

/// A career path row ready for insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCareerPath {
    pub title: String,
    /// Semicolon-delimited skill list, e.g. `"care;triage"`
    pub required_skills: Option<String>,
    pub description: String,
    pub duration_weeks: Option<i64>,
}

impl NewCareerPath {
    pub fn new(title: impl Into<String>, required_skills: Option<&str>) -> Self {
        Self {
            title: title.into(),
            required_skills: required_skills.map(str::to_string),
            description: String::new(),
            duration_weeks: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_duration_weeks(mut self, weeks: i64) -> Self {
        self.duration_weeks = Some(weeks);
        self
    }
}

/// A stored career path as listed to callers.
///
/// `duration_weeks` is never null here: a missing duration reads back as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPathSummary {
    pub career_id: i64,
    pub title: Option<String>,
    pub required_skills: Option<String>,
    pub description: Option<String>,
    pub duration_weeks: i64,
}

impl CareerPathSummary {
    /// Split the delimited skill list into individual skills
    pub fn skills(&self) -> Vec<&str> {
        self.required_skills
            .as_deref()
            .map(|s| s.split(';').map(str::trim).filter(|s| !s.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// Database statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub users: usize,
    pub career_paths: usize,
    /// Estimated skill count: `;` count + 1 for every career path with skills
    pub skills: usize,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Users: {}", self.users)?;
        writeln!(f, "  Career paths: {}", self.career_paths)?;
        writeln!(f, "  Skills: {}", self.skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_skills_split() {
        let summary = CareerPathSummary {
            career_id: 1,
            title: Some("Nurse".to_string()),
            required_skills: Some("care; triage;;".to_string()),
            description: None,
            duration_weeks: 0,
        };
        assert_eq!(summary.skills(), vec!["care", "triage"]);
    }

    #[test]
    fn test_summary_without_skills() {
        let summary = CareerPathSummary {
            career_id: 2,
            title: None,
            required_skills: None,
            description: None,
            duration_weeks: 0,
        };
        assert!(summary.skills().is_empty());
    }

    #[test]
    fn test_stats_display() {
        let stats = DbStats { users: 3, career_paths: 2, skills: 7 };
        let text = stats.to_string();
        assert!(text.contains("Users: 3"));
        assert!(text.contains("Skills: 7"));
    }
}
