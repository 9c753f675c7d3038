//! Plain-text views for the terminal.

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::admin::format_remaining;
use crate::model::{AdminSession, FeedbackItem, FeedbackStatus};
use crate::query::{ListQuery, TabCounts};

const TIMESTAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute] UTC");

#[must_use]
pub fn timestamp(at: OffsetDateTime) -> String {
    match at.to_offset(time::UtcOffset::UTC).format(TIMESTAMP) {
        Ok(s) => s,
        Err(_) => at.to_string(),
    }
}

#[must_use]
pub fn tab_header(counts: TabCounts) -> String {
    format!(
        "all {} | feedback {} | idea {} | error {} | resolved {}",
        counts.all, counts.feedback, counts.idea, counts.error, counts.resolved
    )
}

/// One line per item: id, type, votes, title and author.
#[must_use]
pub fn row(item: &FeedbackItem) -> String {
    let marker = if item.status == FeedbackStatus::Resolved { " [resolved]" } else { "" };
    let files = if item.files.is_empty() { String::new() } else { format!(" +{} file(s)", item.files.len()) };
    format!("{:<12} {:<8} {:>4} votes  {} ({}){files}{marker}", item.id, item.kind, item.votes, item.title, item.author)
}

#[must_use]
pub fn list(items: &[FeedbackItem], counts: TabCounts, query: &ListQuery) -> String {
    let mut out = tab_header(counts);
    out.push_str(&format!("\ntab: {}  sort: {}", query.tab, query.sort));
    if !query.search.trim().is_empty() {
        out.push_str(&format!("  search: {:?}", query.search));
    }
    if items.is_empty() {
        out.push_str("\nno feedback matches");
        return out;
    }
    for item in items {
        out.push('\n');
        out.push_str(&row(item));
    }
    out
}

#[must_use]
pub fn detail(item: &FeedbackItem, voted: bool) -> String {
    let mut lines = vec![
        format!("{} [{}] {}", item.title, item.kind, item.status.as_str()),
        format!("id: {}", item.id),
        format!("author: {}", item.author),
        format!("votes: {}{}", item.votes, if voted { " (you voted)" } else { "" }),
        format!("created: {}", timestamp(item.created_at)),
    ];
    if item.updated_at != item.created_at {
        lines.push(format!("updated: {}", timestamp(item.updated_at)));
    }
    lines.push(String::new());
    lines.push(item.content.clone());
    if !item.files.is_empty() {
        lines.push(String::new());
        lines.push("attachments:".to_owned());
        lines.extend(
            item.files
                .iter()
                .map(|f| format!("  {} ({}, {} bytes) {}", f.name, f.mime_type.as_str(), f.size, f.url)),
        );
    }
    lines.join("\n")
}

#[must_use]
pub fn session_status(session: Option<&AdminSession>, now: OffsetDateTime) -> String {
    match session {
        Some(s) if s.is_valid_at(now) => format!(
            "admin session active, {} left (logged in {}, expires {})",
            format_remaining(s.expires_at - now),
            timestamp(s.login_time),
            timestamp(s.expires_at),
        ),
        _ => "not logged in".to_owned(),
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
