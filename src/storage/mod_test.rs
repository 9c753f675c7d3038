use super::*;

// =============================================================================
// validate_key
// =============================================================================

#[test]
fn validate_key_accepts_known_keys() {
    for key in [FEEDBACKS_KEY, VOTES_KEY, USER_ID_KEY, ADMIN_SESSION_KEY] {
        assert!(validate_key(key).is_ok(), "{key} should be valid");
    }
}

#[test]
fn validate_key_rejects_empty() {
    assert!(matches!(validate_key(""), Err(StorageError::InvalidKey(_))));
}

#[test]
fn validate_key_rejects_path_separators() {
    assert!(validate_key("../escape").is_err());
    assert!(validate_key("a/b").is_err());
    assert!(validate_key("dot.key").is_err());
}

// =============================================================================
// load_json / save_json
// =============================================================================

#[test]
fn load_json_missing_key_is_none() {
    let storage = MemoryStorage::new();
    let loaded: Option<Vec<u32>> = load_json(&storage, VOTES_KEY).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn save_then_load_preserves_value() {
    let storage = MemoryStorage::new();
    save_json(&storage, USER_ID_KEY, "abc123xyz").unwrap();
    let loaded: Option<String> = load_json(&storage, USER_ID_KEY).unwrap();
    assert_eq!(loaded.as_deref(), Some("abc123xyz"));
}

#[test]
fn save_json_writes_plain_json_text() {
    let storage = MemoryStorage::new();
    save_json(&storage, VOTES_KEY, &vec![1, 2, 3]).unwrap();
    assert_eq!(storage.get_item(VOTES_KEY).unwrap().as_deref(), Some("[1,2,3]"));
}

#[test]
fn load_json_garbage_is_parse_error() {
    let storage = MemoryStorage::new();
    storage.set_item(FEEDBACKS_KEY, "{not json").unwrap();
    let err = load_json::<_, Vec<u32>>(&storage, FEEDBACKS_KEY).unwrap_err();
    assert!(matches!(err, StorageError::Parse { ref key, .. } if key == FEEDBACKS_KEY));
    assert!(err.to_string().contains(FEEDBACKS_KEY));
}

#[test]
fn load_json_wrong_shape_is_parse_error() {
    let storage = MemoryStorage::new();
    storage.set_item(VOTES_KEY, "\"a string\"").unwrap();
    assert!(load_json::<_, Vec<u32>>(&storage, VOTES_KEY).is_err());
}
