//! Static first-load dataset.
//!
//! Every fresh client starts from the same six items and two votes. The
//! dataset is also the fallback whenever stored data cannot be read.

use time::macros::datetime;

use crate::model::{FeedbackItem, FeedbackStatus, FeedbackType, MediaFile, MediaKind, MimeType, VoteRecord};

fn screenshot() -> MediaFile {
    MediaFile {
        id: "1".into(),
        name: "screenshot.png".into(),
        kind: MediaKind::Image,
        url: "/images/screenshot1.png".into(),
        mime_type: MimeType::Png,
        size: 1_024_000,
    }
}

fn error_video() -> MediaFile {
    MediaFile {
        id: "2".into(),
        name: "error-video.mp4".into(),
        kind: MediaKind::Video,
        url: "/videos/error-demo.mp4".into(),
        mime_type: MimeType::Mp4,
        size: 5_120_000,
    }
}

#[must_use]
pub fn seed_feedbacks() -> Vec<FeedbackItem> {
    vec![
        FeedbackItem {
            id: "1".into(),
            kind: FeedbackType::Feedback,
            title: "Simplify the main navigation".into(),
            content: "The navigation on the main page is a bit complex and first-time users may get lost. \
                      A more intuitive menu structure would help a lot!"
                .into(),
            author: "Chulsoo".into(),
            files: vec![screenshot()],
            votes: 23,
            status: FeedbackStatus::Active,
            created_at: datetime!(2024-01-15 10:30:00 UTC),
            updated_at: datetime!(2024-01-15 10:30:00 UTC),
        },
        FeedbackItem {
            id: "2".into(),
            kind: FeedbackType::Error,
            title: "Login page throws errors".into(),
            content: "Clicking the login button intermittently returns a server error, mostly on mobile. \
                      See the attached screenshot and recording."
                .into(),
            author: "Younghee".into(),
            files: vec![screenshot(), error_video()],
            votes: 18,
            status: FeedbackStatus::Active,
            created_at: datetime!(2024-01-14 14:20:00 UTC),
            updated_at: datetime!(2024-01-14 14:20:00 UTC),
        },
        FeedbackItem {
            id: "3".into(),
            kind: FeedbackType::Idea,
            title: "Dark mode support".into(),
            content: "More and more people use dark mode. Supporting it would reduce eye strain at night.".into(),
            author: "Minsu".into(),
            files: Vec::new(),
            votes: 45,
            status: FeedbackStatus::Active,
            created_at: datetime!(2024-01-13 09:15:00 UTC),
            updated_at: datetime!(2024-01-13 09:15:00 UTC),
        },
        FeedbackItem {
            id: "4".into(),
            kind: FeedbackType::Feedback,
            title: "Search speed improvement shipped".into(),
            content: "The search speed improvement I suggested earlier is live. Results come back much faster now. \
                      Thank you!"
                .into(),
            author: "Sujin".into(),
            files: Vec::new(),
            votes: 12,
            status: FeedbackStatus::Resolved,
            created_at: datetime!(2024-01-12 16:45:00 UTC),
            updated_at: datetime!(2024-01-16 11:20:00 UTC),
        },
        FeedbackItem {
            id: "5".into(),
            kind: FeedbackType::Error,
            title: "File upload fails".into(),
            content: "Uploading files over 10MB sometimes fails. The progress bar reaches 100% and then an error \
                      message appears."
                .into(),
            author: "Donghoon".into(),
            files: Vec::new(),
            votes: 8,
            status: FeedbackStatus::Active,
            created_at: datetime!(2024-01-11 13:30:00 UTC),
            updated_at: datetime!(2024-01-11 13:30:00 UTC),
        },
        FeedbackItem {
            id: "6".into(),
            kind: FeedbackType::Idea,
            title: "Keyboard shortcuts".into(),
            content: "Basic shortcuts such as Ctrl+S to save and Ctrl+Z to undo would make power users much faster."
                .into(),
            author: "Gildong".into(),
            files: Vec::new(),
            votes: 31,
            status: FeedbackStatus::Active,
            created_at: datetime!(2024-01-10 11:00:00 UTC),
            updated_at: datetime!(2024-01-10 11:00:00 UTC),
        },
    ]
}

#[must_use]
pub fn seed_votes() -> Vec<VoteRecord> {
    vec![
        VoteRecord {
            feedback_id: "1".into(),
            user_identifier: "192.168.1.1".into(),
            voted_at: datetime!(2024-01-15 11:00:00 UTC),
        },
        VoteRecord {
            feedback_id: "3".into(),
            user_identifier: "192.168.1.1".into(),
            voted_at: datetime!(2024-01-13 10:00:00 UTC),
        },
    ]
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
