use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::normalize::normalize;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LogoError {
    #[error("logo name cannot be empty")]
    EmptyName,

    #[error("logo file name cannot be empty")]
    EmptyFileName,

    #[error("logo {name:?} has no accepted answers")]
    NoAcceptedAnswers { name: String },

    #[error("logo {name:?} has an accepted answer that normalizes to nothing")]
    BlankAcceptedAnswer { name: String },
}

//
// ─── LOGO ──────────────────────────────────────────────────────────────────────
//

/// One quiz item: a logo, its hint, and the guesses that count as correct.
///
/// `file_name` is an opaque reference into the external image catalog; the
/// core never resolves or validates it. Immutable for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    name: String,
    file_name: String,
    hint: String,
    accepted_answers: Vec<String>,
}

impl Logo {
    /// Creates a validated logo record.
    ///
    /// # Errors
    ///
    /// Returns `LogoError` if the name or file name is empty, or if the
    /// accepted-answer list is empty or contains a whitespace-only answer.
    pub fn new(
        name: impl Into<String>,
        file_name: impl Into<String>,
        hint: impl Into<String>,
        accepted_answers: Vec<String>,
    ) -> Result<Self, LogoError> {
        let logo = Self {
            name: name.into(),
            file_name: file_name.into(),
            hint: hint.into(),
            accepted_answers,
        };
        logo.validate()?;
        Ok(logo)
    }

    /// Re-checks the record invariants, for logos built via deserialization.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Logo::new`].
    pub fn validate(&self) -> Result<(), LogoError> {
        if self.name.trim().is_empty() {
            return Err(LogoError::EmptyName);
        }
        if self.file_name.trim().is_empty() {
            return Err(LogoError::EmptyFileName);
        }
        if self.accepted_answers.is_empty() {
            return Err(LogoError::NoAcceptedAnswers {
                name: self.name.clone(),
            });
        }
        if self
            .accepted_answers
            .iter()
            .any(|answer| normalize(answer).is_empty())
        {
            return Err(LogoError::BlankAcceptedAnswer {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn accepted_answers(&self) -> &[String] {
        &self.accepted_answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_logo_constructs() {
        let logo = Logo::new("DBS", "dbs.png", "A local bank", vec!["DBS".into()]).unwrap();
        assert_eq!(logo.name(), "DBS");
        assert_eq!(logo.accepted_answers(), ["DBS".to_string()]);
    }

    #[test]
    fn empty_accepted_answers_rejected() {
        let err = Logo::new("DBS", "dbs.png", "A local bank", Vec::new()).unwrap_err();
        assert!(matches!(err, LogoError::NoAcceptedAnswers { .. }));
    }

    #[test]
    fn whitespace_only_answer_rejected() {
        let err = Logo::new("DBS", "dbs.png", "A local bank", vec!["  ".into()]).unwrap_err();
        assert!(matches!(err, LogoError::BlankAcceptedAnswer { .. }));
    }

    #[test]
    fn empty_name_rejected() {
        let err = Logo::new("", "dbs.png", "hint", vec!["DBS".into()]).unwrap_err();
        assert!(matches!(err, LogoError::EmptyName));
    }
}
