#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::sync::{Arc, Barrier};
    use std::thread;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todo_suite::db::users::Users;
    use todo_suite::libs::config::DatabaseConfig;
    use todo_suite::libs::error::TodoError;
    use todo_suite::libs::form::TodoForm;
    use todo_suite::libs::mutation::TodoMutation;
    use todo_suite::libs::query::TodoQuery;
    use todo_suite::libs::todo::StatusFilter;

    struct MutationTestContext {
        _temp_dir: TempDir,
        config: DatabaseConfig,
    }

    impl TestContext for MutationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config = DatabaseConfig::at(temp_dir.path().join("todo-suite.db"));
            MutationTestContext {
                _temp_dir: temp_dir,
                config,
            }
        }
    }

    impl MutationTestContext {
        fn mutation(&self) -> TodoMutation {
            TodoMutation::new(&self.config).unwrap()
        }

        fn query(&self) -> TodoQuery {
            TodoQuery::new(&self.config).unwrap()
        }
    }

    #[test_context(MutationTestContext)]
    #[test]
    fn test_create_applies_defaults(ctx: &mut MutationTestContext) {
        let todo = ctx.mutation().create(&TodoForm::new("Book flights")).unwrap();

        let all = ctx.query().list(StatusFilter::All).unwrap();
        assert_eq!(all, vec![todo.clone()]);
        assert_eq!(todo.notes, "");
        assert_eq!(todo.due_date, None);
        assert_eq!(todo.priority, 1);
        assert!(!todo.is_resolved);
        assert_eq!(todo.owner_id, None);
    }

    #[test_context(MutationTestContext)]
    #[test]
    fn test_create_with_empty_title_writes_nothing(ctx: &mut MutationTestContext) {
        let error = ctx.mutation().create(&TodoForm::new("")).unwrap_err();

        let errors = error.validation_errors().unwrap();
        assert!(errors.contains("title"));
        assert_eq!(ctx.query().counts().unwrap().total, 0);
    }

    #[test_context(MutationTestContext)]
    #[test]
    fn test_create_reports_every_field(ctx: &mut MutationTestContext) {
        let form = TodoForm {
            due_date: "31/01/2025".to_string(),
            priority: "urgent".to_string(),
            owner: Some(42),
            ..TodoForm::new(&"x".repeat(201))
        };

        let error = ctx.mutation().create(&form).unwrap_err();
        let errors = error.validation_errors().unwrap();
        for field in ["title", "due_date", "priority", "owner"] {
            assert!(errors.contains(field), "missing error for {}", field);
        }
        assert_eq!(errors.messages("owner"), vec!["Select a valid owner. User 42 does not exist."]);
        assert_eq!(ctx.query().counts().unwrap().total, 0);
    }

    #[test_context(MutationTestContext)]
    #[test]
    fn test_update_replaces_fields(ctx: &mut MutationTestContext) {
        let mut mutation = ctx.mutation();
        let original = mutation.create(&TodoForm::new("Draft blog post")).unwrap();

        let form = TodoForm {
            title: "Publish blog post".to_string(),
            notes: "Final pass".to_string(),
            due_date: "2025-02-14".to_string(),
            priority: "3".to_string(),
            is_resolved: true,
            owner: None,
        };
        mutation.update(original.id, &form).unwrap();

        let stored = ctx.query().get(original.id).unwrap();
        assert_eq!(stored.title, "Publish blog post");
        assert_eq!(stored.notes, "Final pass");
        assert_eq!(stored.due_date, NaiveDate::from_ymd_opt(2025, 2, 14));
        assert_eq!(stored.priority, 3);
        assert!(stored.is_resolved);
        assert_eq!(stored.created_at, original.created_at);
        assert!(stored.updated_at > original.updated_at);
    }

    #[test_context(MutationTestContext)]
    #[test]
    fn test_rejected_update_keeps_row(ctx: &mut MutationTestContext) {
        let mut mutation = ctx.mutation();
        let original = mutation.create(&TodoForm::new("Keep me")).unwrap();

        let form = TodoForm {
            priority: "-3".to_string(),
            ..TodoForm::from_todo(&original)
        };
        let error = mutation.update(original.id, &form).unwrap_err();
        assert!(error.validation_errors().unwrap().contains("priority"));

        assert_eq!(ctx.query().get(original.id).unwrap(), original);
    }

    #[test_context(MutationTestContext)]
    #[test]
    fn test_update_missing_is_not_found_before_validation(ctx: &mut MutationTestContext) {
        let error = ctx.mutation().update(7, &TodoForm::new("")).unwrap_err();
        assert!(matches!(error, TodoError::NotFound(7)));
    }

    #[test_context(MutationTestContext)]
    #[test]
    fn test_toggle_twice(ctx: &mut MutationTestContext) {
        let mut mutation = ctx.mutation();
        let mut query = ctx.query();
        let original = mutation.create(&TodoForm::new("Water plants")).unwrap();

        assert!(mutation.toggle(original.id).unwrap());
        let once = query.get(original.id).unwrap();
        assert!(once.updated_at > original.updated_at);

        assert!(!mutation.toggle(original.id).unwrap());
        let twice = query.get(original.id).unwrap();
        assert_eq!(twice.is_resolved, original.is_resolved);
        assert!(twice.updated_at > once.updated_at);
        assert_eq!(twice.title, original.title);
    }

    #[test_context(MutationTestContext)]
    #[test]
    fn test_delete_then_everything_is_not_found(ctx: &mut MutationTestContext) {
        let mut mutation = ctx.mutation();
        let todo = mutation.create(&TodoForm::new("Temporary")).unwrap();

        mutation.delete(todo.id).unwrap();

        assert!(ctx.query().get(todo.id).unwrap_err().is_not_found());
        assert!(mutation.update(todo.id, &TodoForm::new("Back")).unwrap_err().is_not_found());
        assert!(mutation.toggle(todo.id).unwrap_err().is_not_found());
        assert!(mutation.delete(todo.id).unwrap_err().is_not_found());
    }

    #[test_context(MutationTestContext)]
    #[test]
    fn test_owner_must_exist(ctx: &mut MutationTestContext) {
        let owner = Users::new(&ctx.config).unwrap().create("alice").unwrap();
        let mut mutation = ctx.mutation();

        let form = TodoForm {
            owner: Some(owner.id),
            ..TodoForm::new("Owned")
        };
        let todo = mutation.create(&form).unwrap();
        assert_eq!(todo.owner_id, Some(owner.id));

        let form = TodoForm {
            owner: Some(owner.id + 100),
            ..TodoForm::from_todo(&todo)
        };
        let error = mutation.update(todo.id, &form).unwrap_err();
        assert!(error.validation_errors().unwrap().contains("owner"));
    }

    #[test_context(MutationTestContext)]
    #[test]
    fn test_deleting_owner_cascades(ctx: &mut MutationTestContext) {
        let mut users = Users::new(&ctx.config).unwrap();
        let alice = users.create("alice").unwrap();
        let bob = users.create("bob").unwrap();

        let mut mutation = ctx.mutation();
        for (title, owner) in [("Alice 1", Some(alice.id)), ("Alice 2", Some(alice.id)), ("Bob", Some(bob.id)), ("Nobody", None)] {
            mutation
                .create(&TodoForm {
                    owner,
                    ..TodoForm::new(title)
                })
                .unwrap();
        }

        assert_eq!(users.delete(alice.id).unwrap(), 1);

        let remaining = ctx.query().list(StatusFilter::All).unwrap();
        let mut titles: Vec<&str> = remaining.iter().map(|t| t.title.as_str()).collect();
        titles.sort();
        assert_eq!(titles, vec!["Bob", "Nobody"]);
        assert_eq!(users.list().unwrap().len(), 1);
    }

    const THREADS: usize = 8;
    const ROUNDS: usize = 20;

    /// Runs `ROUNDS` toggles per thread, each thread with its own connection,
    /// all threads released together every round. Returns the failure count.
    fn toggle_concurrently(config: &DatabaseConfig, ids: Vec<i64>) -> usize {
        let barrier = Arc::new(Barrier::new(ids.len()));

        let handles: Vec<_> = ids
            .into_iter()
            .map(|id| {
                let config = config.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let mut mutation = TodoMutation::new(&config).unwrap();
                    let mut failures = 0;
                    for _ in 0..ROUNDS {
                        barrier.wait();
                        if let Err(e) = mutation.toggle(id) {
                            eprintln!("toggle {} failed: {}", id, e);
                            failures += 1;
                        }
                    }
                    failures
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).sum()
    }

    #[test_context(MutationTestContext)]
    #[test]
    fn test_concurrent_toggles_on_different_rows(ctx: &mut MutationTestContext) {
        let mut mutation = ctx.mutation();
        let ids: Vec<i64> = (0..THREADS)
            .map(|i| mutation.create(&TodoForm::new(&format!("Row {}", i))).unwrap().id)
            .collect();

        assert_eq!(toggle_concurrently(&ctx.config, ids), 0);

        // An even number of toggles per row leaves every row active.
        let totals = ctx.query().counts().unwrap();
        assert_eq!(totals.active as usize, THREADS);
        assert_eq!(totals.resolved, 0);
    }

    #[test_context(MutationTestContext)]
    #[test]
    fn test_concurrent_toggles_on_one_row_are_serialized(ctx: &mut MutationTestContext) {
        let original = ctx.mutation().create(&TodoForm::new("Shared")).unwrap();

        assert_eq!(toggle_concurrently(&ctx.config, vec![original.id; THREADS]), 0);

        // THREADS * ROUNDS is even, so no toggle was lost.
        let stored = ctx.query().get(original.id).unwrap();
        assert_eq!(stored.is_resolved, original.is_resolved);
        assert!(stored.updated_at > original.updated_at);
    }
}
