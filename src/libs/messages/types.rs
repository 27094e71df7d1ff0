#[derive(Debug, Clone)]
pub enum Message {
    // === TODO MESSAGES ===
    TodoCreated(i64, String),  // id, title
    TodoUpdated(i64, String),  // id, title
    TodoDeleted(i64),          // id
    TodoToggled(i64, bool),    // id, resolved
    TodoNotFound(i64),         // id
    TodoValidationFailed,
    FieldInvalid(String, String), // field, message
    TodosHeader(String),          // status filter
    TodoDetailsHeader(i64),       // id
    NoTodosFound(String),         // status filter
    TodoTotals {
        total: u64,
        active: u64,
        resolved: u64,
    },
    ConfirmDeleteTodo(String), // title
    OperationCancelled,

    // === FORM PROMPTS ===
    PromptTodoTitle,
    PromptTodoNotes,
    PromptTodoDueDate,
    PromptTodoPriority,
    PromptTodoResolved,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleDatabase,
    ConfigModuleList,
    PromptDatabasePath,
    PromptDefaultStatus,

    // === EXPORT MESSAGES ===
    ExportingTodos(usize, String), // count, format
    ExportCompleted(String),       // path

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    MigrationHistoryEntry(u32, String, String), // version, name, applied_at
}
