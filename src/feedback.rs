//! Submission input and its validation rules.

use crate::model::{FeedbackType, MediaFile};

pub const TITLE_MAX_CHARS: usize = 40;
pub const CONTENT_MAX_CHARS: usize = 500;
pub const AUTHOR_MAX_CHARS: usize = 10;
pub const FILES_MAX: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("author name is required")]
    AuthorRequired,
    #[error("author name must be {max} characters or fewer")]
    AuthorTooLong { max: usize },
    #[error("title is required")]
    TitleRequired,
    #[error("title must be {max} characters or fewer")]
    TitleTooLong { max: usize },
    #[error("content is required")]
    ContentRequired,
    #[error("content must be {max} characters or fewer")]
    ContentTooLong { max: usize },
    #[error("at most {max} files can be attached")]
    TooManyFiles { max: usize },
}

/// A feedback submission before it becomes a stored item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub kind: FeedbackType,
    pub title: String,
    pub content: String,
    pub author: String,
    pub files: Vec<MediaFile>,
}

impl NewFeedback {
    #[must_use]
    pub fn new(
        kind: FeedbackType,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self { kind, title: title.into(), content: content.into(), author: author.into(), files: Vec::new() }
    }

    #[must_use]
    pub fn with_files(mut self, files: Vec<MediaFile>) -> Self {
        self.files = files;
        self
    }

    /// Check fields in form order: author, title, content, then attachments.
    ///
    /// # Errors
    ///
    /// Returns the first rule the submission breaks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text(
            &self.author,
            AUTHOR_MAX_CHARS,
            ValidationError::AuthorRequired,
            ValidationError::AuthorTooLong { max: AUTHOR_MAX_CHARS },
        )?;
        check_text(
            &self.title,
            TITLE_MAX_CHARS,
            ValidationError::TitleRequired,
            ValidationError::TitleTooLong { max: TITLE_MAX_CHARS },
        )?;
        check_text(
            &self.content,
            CONTENT_MAX_CHARS,
            ValidationError::ContentRequired,
            ValidationError::ContentTooLong { max: CONTENT_MAX_CHARS },
        )?;
        if self.files.len() > FILES_MAX {
            return Err(ValidationError::TooManyFiles { max: FILES_MAX });
        }
        Ok(())
    }
}

// Blank means whitespace-only. Length counts UTF-16 code units, the unit
// browser form limits use, so a character outside the BMP counts twice.
fn check_text(
    value: &str,
    max: usize,
    required: ValidationError,
    too_long: ValidationError,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(required);
    }
    if value.encode_utf16().count() > max {
        return Err(too_long);
    }
    Ok(())
}

#[cfg(test)]
#[path = "feedback_test.rs"]
mod tests;
