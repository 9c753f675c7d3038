use time::Duration;
use time::macros::datetime;

use super::*;
use crate::query::{self, FilterTab};
use crate::seed::seed_feedbacks;

fn item(id: &str) -> FeedbackItem {
    seed_feedbacks().into_iter().find(|f| f.id == id).unwrap()
}

#[test]
fn timestamp_is_minute_precision_utc() {
    assert_eq!(timestamp(datetime!(2024-01-15 10:30:59 UTC)), "2024-01-15 10:30 UTC");
    assert_eq!(timestamp(datetime!(2024-01-15 19:30:00 +9)), "2024-01-15 10:30 UTC");
}

#[test]
fn header_lists_every_tab() {
    let counts = query::tab_counts(&seed_feedbacks());
    assert_eq!(tab_header(counts), "all 5 | feedback 1 | idea 2 | error 2 | resolved 1");
}

#[test]
fn row_marks_resolved_and_attachments() {
    let resolved = row(&item("4"));
    assert!(resolved.ends_with("[resolved]"));

    let with_files = row(&item("2"));
    assert!(with_files.contains("18 votes"));
    assert!(with_files.contains("+2 file(s)"));
    assert!(with_files.contains("Login page throws errors (Younghee)"));
}

#[test]
fn list_reports_empty_view() {
    let query = ListQuery { search: "nothing like this".into(), ..ListQuery::default() };
    let out = list(&[], TabCounts::default(), &query);
    assert!(out.contains("search: \"nothing like this\""));
    assert!(out.ends_with("no feedback matches"));
}

#[test]
fn list_prints_rows_in_given_order() {
    let items = seed_feedbacks();
    let query = ListQuery { tab: FilterTab::Resolved, ..ListQuery::default() };
    let view = query::filter_feedback(&items, &query);
    let out = list(&view, query::tab_counts(&items), &query);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "tab: resolved  sort: latest");
    assert!(lines[2].starts_with("4 "));
}

#[test]
fn detail_shows_attachments_and_vote_state() {
    let out = detail(&item("2"), true);
    assert!(out.contains("votes: 18 (you voted)"));
    assert!(out.contains("attachments:"));
    assert!(out.contains("error-video.mp4 (video/mp4, 5120000 bytes)"));

    let plain = detail(&item("3"), false);
    assert!(plain.contains("votes: 45\n"));
    assert!(!plain.contains("attachments:"));
    assert!(!plain.contains("updated:"));
}

#[test]
fn detail_shows_update_time_once_changed() {
    let out = detail(&item("4"), false);
    assert!(out.contains("updated: 2024-01-16 11:20 UTC"));
}

#[test]
fn session_status_reflects_validity() {
    let now = datetime!(2024-07-01 09:00 UTC);
    let session = AdminSession { is_logged_in: true, login_time: now, expires_at: now + Duration::days(7) };

    let active = session_status(Some(&session), now + Duration::hours(1));
    assert!(active.starts_with("admin session active, 6d 23h left"));
    assert_eq!(session_status(Some(&session), now + Duration::days(7)), "not logged in");
    assert_eq!(session_status(None, now), "not logged in");
}
