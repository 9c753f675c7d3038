use super::*;
use time::macros::datetime;

// =============================================================================
// FeedbackType
// =============================================================================

#[test]
fn feedback_type_parses_case_insensitively() {
    assert_eq!("IDEA".parse::<FeedbackType>().unwrap(), FeedbackType::Idea);
    assert_eq!(" error ".parse::<FeedbackType>().unwrap(), FeedbackType::Error);
}

#[test]
fn feedback_type_unknown_lists_expected() {
    let err = "bug".parse::<FeedbackType>().unwrap_err();
    assert!(err.to_string().contains("feedback, idea, error"));
}

#[test]
fn feedback_type_display_matches_wire_name() {
    for kind in FeedbackType::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{kind}\""));
    }
}

// =============================================================================
// MimeType
// =============================================================================

#[test]
fn mime_from_extension_known() {
    assert_eq!(MimeType::from_extension("JPG"), Some(MimeType::Jpeg));
    assert_eq!(MimeType::from_extension("jpeg"), Some(MimeType::Jpeg));
    assert_eq!(MimeType::from_extension("png"), Some(MimeType::Png));
    assert_eq!(MimeType::from_extension("Mp4"), Some(MimeType::Mp4));
}

#[test]
fn mime_from_extension_rejects_others() {
    assert_eq!(MimeType::from_extension("gif"), None);
    assert_eq!(MimeType::from_extension(""), None);
}

#[test]
fn mime_kind_derivation() {
    assert_eq!(MimeType::Png.kind(), MediaKind::Image);
    assert_eq!(MimeType::Jpeg.kind(), MediaKind::Image);
    assert_eq!(MimeType::Mp4.kind(), MediaKind::Video);
}

// =============================================================================
// Persisted shape
// =============================================================================

#[test]
fn feedback_item_reads_browser_written_json() {
    let raw = r#"{
        "id": "1700000000000",
        "type": "error",
        "title": "Upload fails",
        "content": "Files >10MB fail to upload",
        "author": "Kim",
        "files": [{
            "id": "1700000000000_0",
            "name": "shot.png",
            "type": "image",
            "url": "blob:abc",
            "mimeType": "image/png",
            "size": 2048
        }],
        "votes": 3,
        "status": "active",
        "createdAt": "2024-01-15T10:30:00.000Z",
        "updatedAt": "2024-01-15T10:30:00.000Z"
    }"#;

    let item: FeedbackItem = serde_json::from_str(raw).unwrap();
    assert_eq!(item.kind, FeedbackType::Error);
    assert_eq!(item.files.len(), 1);
    assert_eq!(item.files[0].mime_type, MimeType::Png);
    assert_eq!(item.created_at, datetime!(2024-01-15 10:30:00 UTC));
    assert!(item.is_active());
}

#[test]
fn feedback_item_without_files_field_defaults_empty() {
    let raw = r#"{"id":"3","type":"idea","title":"t","content":"c","author":"a","votes":0,
        "status":"resolved","createdAt":"2024-01-13T09:15:00Z","updatedAt":"2024-01-13T09:15:00Z"}"#;
    let item: FeedbackItem = serde_json::from_str(raw).unwrap();
    assert!(item.files.is_empty());
    assert!(!item.is_active());
}

#[test]
fn feedback_item_serializes_camel_case_and_omits_empty_files() {
    let item = FeedbackItem {
        id: "9".into(),
        kind: FeedbackType::Idea,
        title: "t".into(),
        content: "c".into(),
        author: "a".into(),
        files: Vec::new(),
        votes: 1,
        status: FeedbackStatus::Active,
        created_at: datetime!(2024-02-01 00:00:00 UTC),
        updated_at: datetime!(2024-02-01 00:00:00 UTC),
    };
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["type"], "idea");
    assert_eq!(value["createdAt"], "2024-02-01T00:00:00Z");
    assert!(value.get("files").is_none());
    assert!(value.get("created_at").is_none());
}

#[test]
fn admin_session_uses_iso_strings() {
    let session = AdminSession {
        is_logged_in: true,
        login_time: datetime!(2024-03-01 12:00:00 UTC),
        expires_at: datetime!(2024-03-08 12:00:00 UTC),
    };
    let value = serde_json::to_value(session).unwrap();
    assert_eq!(value["isLoggedIn"], true);
    assert_eq!(value["expiresAt"], "2024-03-08T12:00:00Z");
}

// =============================================================================
// Validity and matching
// =============================================================================

#[test]
fn admin_session_valid_strictly_before_expiry() {
    let session = AdminSession {
        is_logged_in: true,
        login_time: datetime!(2024-03-01 12:00:00 UTC),
        expires_at: datetime!(2024-03-08 12:00:00 UTC),
    };
    assert!(session.is_valid_at(datetime!(2024-03-08 11:59:59 UTC)));
    assert!(!session.is_valid_at(datetime!(2024-03-08 12:00:00 UTC)));
}

#[test]
fn admin_session_logged_out_flag_is_never_valid() {
    let session = AdminSession {
        is_logged_in: false,
        login_time: datetime!(2024-03-01 12:00:00 UTC),
        expires_at: datetime!(2099-01-01 00:00:00 UTC),
    };
    assert!(!session.is_valid_at(datetime!(2024-03-02 00:00:00 UTC)));
}

#[test]
fn vote_record_matches_pair_only() {
    let record = VoteRecord {
        feedback_id: "1".into(),
        user_identifier: "u".into(),
        voted_at: datetime!(2024-01-01 00:00:00 UTC),
    };
    assert!(record.matches("1", "u"));
    assert!(!record.matches("1", "v"));
    assert!(!record.matches("2", "u"));
}
