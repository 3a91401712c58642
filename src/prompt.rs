//! Interactive collection of user details

use std::io::{BufRead, Write};
use crate::{Error, Result};
use crate::model::NewUser;

const DEFAULT_EXPERIENCE_LEVEL: &str = "beginner";

/// Answers gathered from the interactive prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub interests: String,
    pub skills: String,
    pub hours: String,
    pub experience_level: String,
    pub notes: Option<String>,
}

impl From<UserProfile> for NewUser {
    fn from(profile: UserProfile) -> Self {
        NewUser {
            name: profile.name,
            email: profile.email,
            career_interests: profile.interests,
            current_skills: profile.skills,
            available_hours: profile.hours,
            experience_level: profile.experience_level,
            additional_info: profile.notes,
        }
    }
}

/// Ask for each profile field in turn, reading one line per answer.
///
/// Name, email and interests are required to be answered (an empty line is
/// fine, end of input is not). Later fields default when input runs out.
pub fn collect_user_details<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<UserProfile> {
    let name = ask_required(&mut input, &mut output, "Your name")?;
    let email = ask_required(&mut input, &mut output, "Email")?;
    let interests = ask_required(&mut input, &mut output, "Career interests (e.g. software, data, design)")?;
    let skills = ask(&mut input, &mut output, "Current skills")?.unwrap_or_default();
    let hours = ask(&mut input, &mut output, "Hours available per week")?.unwrap_or_default();
    let experience_level = ask(&mut input, &mut output, "Experience level (beginner/intermediate/advanced)")?
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_EXPERIENCE_LEVEL.to_string());
    let notes = ask(&mut input, &mut output, "Anything else we should know? (optional)")?
        .filter(|s| !s.is_empty());

    Ok(UserProfile {
        name,
        email,
        interests,
        skills,
        hours,
        experience_level,
        notes,
    })
}

fn ask_required<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    ask(input, output, label)?
        .ok_or_else(|| Error::InvalidInput(format!("input ended before '{}' was answered", label)))
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
    write!(output, "{}: ", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_all_fields() {
        let input = "Ana\nana@x.com\n data science \npython\n10h/wk\nintermediate\nprefers remote\n";
        let mut output = Vec::new();

        let profile = collect_user_details(input.as_bytes(), &mut output).unwrap();
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.interests, "data science");
        assert_eq!(profile.experience_level, "intermediate");
        assert_eq!(profile.notes.as_deref(), Some("prefers remote"));

        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.starts_with("Your name: "));
        assert!(prompts.contains("Email: "));
    }

    #[test]
    fn test_optional_fields_default() {
        let input = "Ana\nana@x.com\ndesign\n\n\n\n\n";
        let profile = collect_user_details(input.as_bytes(), Vec::new()).unwrap();
        assert_eq!(profile.skills, "");
        assert_eq!(profile.experience_level, "beginner");
        assert_eq!(profile.notes, None);
    }

    #[test]
    fn test_early_eof_after_required_fields() {
        let profile = collect_user_details("Ana\nana@x.com\ncode\n".as_bytes(), Vec::new()).unwrap();
        assert_eq!(profile.hours, "");
        assert_eq!(profile.experience_level, "beginner");
    }

    #[test]
    fn test_eof_before_interests_is_error() {
        let err = collect_user_details("Ana\n".as_bytes(), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_profile_into_new_user() {
        let profile = UserProfile {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            interests: "data".to_string(),
            skills: "python".to_string(),
            hours: "10h/wk".to_string(),
            experience_level: "beginner".to_string(),
            notes: None,
        };
        let user: NewUser = profile.into();
        assert_eq!(user, NewUser::new("Ana", "ana@x.com", "data", "python", "10h/wk", "beginner"));
    }
}
