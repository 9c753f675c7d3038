//! Board entities and their persisted JSON shape.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase and timestamps as RFC 3339 strings so
//! the stored arrays stay readable by (and from) the browser build of the
//! board. Optional attachments are omitted when empty.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

// =============================================================================
// ENUMS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Feedback,
    Idea,
    Error,
}

impl FeedbackType {
    pub const ALL: [Self; 3] = [Self::Feedback, Self::Idea, Self::Error];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feedback => "feedback",
            Self::Idea => "idea",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error for unrecognised enum spellings on the command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl FromStr for FeedbackType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == wanted).ok_or_else(|| ParseEnumError {
            kind: "feedback type",
            value: s.to_owned(),
            expected: "feedback, idea, error",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    Active,
    Resolved,
}

impl FeedbackStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MimeType {
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "video/mp4")]
    Mp4,
}

impl MimeType {
    #[must_use]
    pub fn kind(self) -> MediaKind {
        match self {
            Self::Jpeg | Self::Png => MediaKind::Image,
            Self::Mp4 => MediaKind::Video,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Mp4 => "video/mp4",
        }
    }

    /// Mime type for a file extension, case-insensitive.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "mp4" => Some(Self::Mp4),
            _ => None,
        }
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

/// Attachment reference. The bytes themselves are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    pub mime_type: MimeType,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FeedbackType,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<MediaFile>,
    pub votes: u32,
    pub status: FeedbackStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl FeedbackItem {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == FeedbackStatus::Active
    }
}

/// One user's vote on one item. Unique per `(feedback_id, user_identifier)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRecord {
    pub feedback_id: String,
    pub user_identifier: String,
    #[serde(with = "time::serde::rfc3339")]
    pub voted_at: OffsetDateTime,
}

impl VoteRecord {
    #[must_use]
    pub fn matches(&self, feedback_id: &str, user_identifier: &str) -> bool {
        self.feedback_id == feedback_id && self.user_identifier == user_identifier
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub is_logged_in: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub login_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
}

impl AdminSession {
    /// Valid only while logged in and strictly before expiry.
    #[must_use]
    pub fn is_valid_at(&self, now: OffsetDateTime) -> bool {
        self.is_logged_in && now < self.expires_at
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
