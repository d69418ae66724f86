use todolist_core::db::open_db_in_memory;
use todolist_core::{
    completion_stats, CompletionStats, DomainService, RepoError, SqliteTodoRepository, Title, Todo,
    TodoId, TodoRepository, ValidationError,
};

fn sample_todo(title: &str) -> Todo {
    Todo::new(Title::new(title).unwrap(), "")
}

#[test]
fn validate_for_create_accepts_valid_input() {
    let conn = open_db_in_memory().unwrap();
    let service = DomainService::new(SqliteTodoRepository::new(&conn));

    assert!(service.validate_for_create("Buy milk", "").is_ok());
    assert!(service
        .validate_for_create("Buy milk", &"d".repeat(1000))
        .is_ok());
}

#[test]
fn validate_for_create_rejects_bad_title_and_long_description() {
    let conn = open_db_in_memory().unwrap();
    let service = DomainService::new(SqliteTodoRepository::new(&conn));

    assert!(matches!(
        service.validate_for_create("", "fine"),
        Err(ValidationError::EmptyTitle)
    ));
    assert!(matches!(
        service.validate_for_create(&"t".repeat(256), ""),
        Err(ValidationError::TitleTooLong { .. })
    ));
    // Description length fails regardless of title validity.
    assert!(matches!(
        service.validate_for_create("Buy milk", &"d".repeat(1001)),
        Err(ValidationError::DescriptionTooLong { chars: 1001 })
    ));
}

#[test]
fn validate_for_update_only_checks_present_fields() {
    let conn = open_db_in_memory().unwrap();
    let service = DomainService::new(SqliteTodoRepository::new(&conn));
    let existing = sample_todo("existing");

    assert!(service
        .validate_for_update(&existing, None, None, None)
        .is_ok());
    assert!(service
        .validate_for_update(&existing, None, None, Some(true))
        .is_ok());
    assert!(matches!(
        service.validate_for_update(&existing, Some(""), None, None),
        Err(ValidationError::EmptyTitle)
    ));
    let long_description = "d".repeat(1001);
    assert!(matches!(
        service.validate_for_update(&existing, None, Some(long_description.as_str()), None),
        Err(ValidationError::DescriptionTooLong { .. })
    ));
}

#[test]
fn can_delete_requires_existence() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTodoRepository::new(&conn);
    let service = DomainService::new(repo);

    let missing = TodoId::new();
    assert!(matches!(
        service.can_delete(missing),
        Err(RepoError::NotFound(id)) if id == missing
    ));

    let todo = sample_todo("deletable");
    repo.create(&todo).unwrap();
    assert!(service.can_delete(todo.id).is_ok());
}

#[test]
fn completion_stats_of_empty_set_is_all_zero() {
    assert_eq!(completion_stats(&[]), CompletionStats::zero());
    assert_eq!(
        CompletionStats::zero(),
        CompletionStats {
            total: 0,
            completed: 0,
            pending: 0,
            ratio: 0.0,
        }
    );
}

#[test]
fn completion_stats_counts_completed_and_pending() {
    let mut todos: Vec<Todo> = (0..10).map(|n| sample_todo(&format!("todo {n}"))).collect();
    for todo in todos.iter_mut().take(7) {
        todo.mark_completed();
    }

    let stats = completion_stats(&todos);
    assert_eq!(stats.total, 10);
    assert_eq!(stats.completed, 7);
    assert_eq!(stats.pending, 3);
    assert!((stats.ratio - 0.7).abs() < 1e-12);
}

#[test]
fn completion_stats_serializes_ratio_as_completion_ratio() {
    let mut todo = sample_todo("done");
    todo.mark_completed();

    let json = serde_json::to_value(completion_stats(&[todo])).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["completed"], 1);
    assert_eq!(json["pending"], 0);
    assert_eq!(json["completion_ratio"], 1.0);
}
