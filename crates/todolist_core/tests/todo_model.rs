use todolist_core::{Title, Todo, TodoId, ValidationError};

#[test]
fn title_trims_and_roundtrips_value() {
    let title = Title::new("  Buy milk  ").unwrap();
    assert_eq!(title.as_str(), "Buy milk");
    assert_eq!(title.to_string(), "Buy milk");
}

#[test]
fn title_rejects_empty_and_whitespace_only_input() {
    assert!(matches!(Title::new(""), Err(ValidationError::EmptyTitle)));
    assert!(matches!(
        Title::new("   \t  "),
        Err(ValidationError::EmptyTitle)
    ));
}

#[test]
fn title_enforces_max_length_in_characters() {
    let at_limit = "a".repeat(255);
    assert!(Title::new(&at_limit).is_ok());

    let over_limit = "a".repeat(256);
    assert!(matches!(
        Title::new(&over_limit),
        Err(ValidationError::TitleTooLong { chars: 256 })
    ));

    // Multi-byte characters count as one character each, not per byte.
    let multibyte = "é".repeat(255);
    assert!(Title::new(&multibyte).is_ok());
}

#[test]
fn title_length_is_checked_after_trimming() {
    let padded = format!("  {}  ", "a".repeat(255));
    assert!(Title::new(&padded).is_ok());
}

#[test]
fn titles_compare_by_trimmed_value() {
    let plain = Title::new("walk the dog").unwrap();
    let padded = Title::new("  walk the dog ").unwrap();
    assert_eq!(plain, padded);
}

#[test]
fn id_parse_roundtrips_canonical_form() {
    let id = TodoId::new();
    let parsed = TodoId::parse(&id.to_string()).unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn id_parse_rejects_malformed_text() {
    let err = TodoId::parse("not-a-uuid").unwrap_err();
    assert!(err.to_string().contains("not-a-uuid"));
    assert_eq!(err.text(), "not-a-uuid");
}

#[test]
fn fresh_ids_are_unique() {
    assert_ne!(TodoId::new(), TodoId::new());
}

#[test]
fn todo_new_sets_defaults() {
    let title = Title::new("Buy milk").unwrap();
    let todo = Todo::new(title, "from the corner shop");

    assert!(!todo.completed);
    assert!(!todo.is_completed());
    assert_eq!(todo.title.as_str(), "Buy milk");
    assert_eq!(todo.description, "from the corner shop");
    assert_eq!(todo.created_at, todo.updated_at);
}

#[test]
fn mutations_advance_updated_at_and_keep_identity() {
    let mut todo = Todo::new(Title::new("Buy milk").unwrap(), "");
    let id = todo.id;
    let created_at = todo.created_at;
    let before = todo.updated_at;

    todo.mark_completed();
    assert!(todo.completed);
    assert!(todo.updated_at > before);
    assert_eq!(todo.id, id);
    assert_eq!(todo.created_at, created_at);

    let before_rename = todo.updated_at;
    todo.rename(Title::new("Buy oat milk").unwrap());
    assert_eq!(todo.title.as_str(), "Buy oat milk");
    assert!(todo.updated_at > before_rename);

    let before_description = todo.updated_at;
    todo.set_description("the 1L carton");
    assert_eq!(todo.description, "the 1L carton");
    assert!(todo.updated_at > before_description);

    assert_eq!(todo.id, id);
    assert_eq!(todo.created_at, created_at);
}

#[test]
fn completion_marks_are_idempotent_in_effect_but_still_restamp() {
    let mut todo = Todo::new(Title::new("water plants").unwrap(), "");

    todo.mark_completed();
    let first_stamp = todo.updated_at;
    todo.mark_completed();
    assert!(todo.completed);
    assert!(todo.updated_at > first_stamp);

    todo.mark_incomplete();
    let incomplete_stamp = todo.updated_at;
    todo.mark_incomplete();
    assert!(!todo.completed);
    assert!(todo.updated_at > incomplete_stamp);
}

#[test]
fn updated_at_never_drops_below_created_at() {
    let mut todo = Todo::new(Title::new("stretch").unwrap(), "");
    for _ in 0..100 {
        todo.mark_completed();
        todo.mark_incomplete();
        assert!(todo.updated_at >= todo.created_at);
    }
}
