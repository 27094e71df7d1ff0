#[cfg(test)]
mod tests {
    use anyhow::Result;
    use clap::Parser;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todo_suite::commands::Cli;
    use todo_suite::libs::config::{Config, DatabaseConfig};
    use todo_suite::libs::query::TodoQuery;
    use todo_suite::libs::todo::StatusFilter;

    struct CommandTestContext {
        temp_dir: TempDir,
        config: Config,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config = Config {
                database: DatabaseConfig::at(temp_dir.path().join("todo-suite.db")),
                list: None,
            };
            CommandTestContext { temp_dir, config }
        }
    }

    impl CommandTestContext {
        fn run(&self, args: &[&str]) -> Result<()> {
            let mut argv = vec!["todo-suite"];
            argv.extend_from_slice(args);
            Cli::try_parse_from(argv)?.run(&self.config)
        }

        fn query(&self) -> TodoQuery {
            TodoQuery::new(&self.config.database).unwrap()
        }
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_list_show(ctx: &mut CommandTestContext) {
        ctx.run(&["add", "Draft blog post", "--due", "2025-01-31", "--priority", "2"]).unwrap();
        ctx.run(&["add", "Pay invoices", "--resolved"]).unwrap();

        let todos = ctx.query().list(StatusFilter::All).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].priority, 2);
        assert!(todos[1].is_resolved);

        ctx.run(&["list"]).unwrap();
        ctx.run(&["list", "--status", "active", "--search", "blog"]).unwrap();
        ctx.run(&["show", &todos[0].id.to_string()]).unwrap();
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_rejects_invalid_input(ctx: &mut CommandTestContext) {
        let error = ctx.run(&["add", "  ", "--priority", "high"]).unwrap_err();
        assert!(error.to_string().contains("Todo was not saved"));
        assert_eq!(ctx.query().counts().unwrap().total, 0);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_edit_toggle_delete(ctx: &mut CommandTestContext) {
        ctx.run(&["add", "Water plants", "--due", "2025-04-01"]).unwrap();
        let id = ctx.query().list(StatusFilter::All).unwrap()[0].id.to_string();

        ctx.run(&["edit", &id, "--title", "Water all plants", "--clear-due", "--priority", "3"]).unwrap();
        let todo = ctx.query().list(StatusFilter::All).unwrap().remove(0);
        assert_eq!(todo.title, "Water all plants");
        assert_eq!(todo.due_date, None);
        assert_eq!(todo.priority, 3);

        ctx.run(&["toggle", &id]).unwrap();
        assert_eq!(ctx.query().counts().unwrap().resolved, 1);

        ctx.run(&["delete", &id, "--yes"]).unwrap();
        assert_eq!(ctx.query().counts().unwrap().total, 0);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_missing_id_is_reported(ctx: &mut CommandTestContext) {
        let attempts = vec![
            vec!["show", "404"],
            vec!["toggle", "404"],
            vec!["delete", "404", "--yes"],
            vec!["edit", "404", "--title", "Ghost"],
        ];
        for args in attempts {
            let error = ctx.run(&args).unwrap_err();
            assert!(error.to_string().contains("Todo with ID 404 not found."), "{:?}", args);
        }
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_export_command(ctx: &mut CommandTestContext) {
        let output = ctx.temp_dir.path().join("out.json");
        let output = output.to_str().unwrap();

        assert!(ctx.run(&["export", "--format", "json", "--output", output]).is_err());

        ctx.run(&["add", "Book flights"]).unwrap();
        ctx.run(&["export", "--format", "json", "--output", output]).unwrap();
        assert!(std::path::Path::new(output).exists());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_migrations_command(ctx: &mut CommandTestContext) {
        ctx.run(&["migrations", "status"]).unwrap();
        ctx.run(&["list"]).unwrap();
        ctx.run(&["migrations", "history"]).unwrap();
    }
}
