//! Display implementation for todo-suite messages.
//!
//! All user-facing text lives here, one arm per [`Message`] variant, so the
//! wording can be reviewed (or translated) in one place.
//!
//! ```rust
//! use todo_suite::libs::messages::Message;
//!
//! let message = Message::TodoNotFound(42);
//! assert_eq!(message.to_string(), "Todo with ID 42 not found.");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TODO MESSAGES ===
            Message::TodoCreated(id, title) => format!("Todo #{} '{}' created.", id, title),
            Message::TodoUpdated(id, title) => format!("Todo #{} '{}' updated.", id, title),
            Message::TodoDeleted(id) => format!("Todo #{} deleted.", id),
            Message::TodoToggled(id, true) => format!("Todo #{} marked as resolved.", id),
            Message::TodoToggled(id, false) => format!("Todo #{} marked as active.", id),
            Message::TodoNotFound(id) => format!("Todo with ID {} not found.", id),
            Message::TodoValidationFailed => "Todo was not saved. Fix the fields above and try again.".to_string(),
            Message::FieldInvalid(field, message) => format!("{}: {}", field, message),
            Message::TodosHeader(status) => format!("Todos ({}):", status),
            Message::TodoDetailsHeader(id) => format!("Todo #{}:", id),
            Message::NoTodosFound(status) => format!("No todos found ({}).", status),
            Message::TodoTotals { total, active, resolved } => {
                format!("Total: {} | Active: {} | Resolved: {}", total, active, resolved)
            }
            Message::ConfirmDeleteTodo(title) => format!("Are you sure you want to delete '{}'?", title),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === FORM PROMPTS ===
            Message::PromptTodoTitle => "Title".to_string(),
            Message::PromptTodoNotes => "Notes (optional)".to_string(),
            Message::PromptTodoDueDate => "Due date (YYYY-MM-DD, optional)".to_string(),
            Message::PromptTodoPriority => "Priority (higher comes first)".to_string(),
            Message::PromptTodoResolved => "Resolved?".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),
            Message::ConfigModuleList => "List settings".to_string(),
            Message::PromptDatabasePath => "Database file".to_string(),
            Message::PromptDefaultStatus => "Default status filter".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingTodos(count, format) => format!("Exporting {} todo(s) as {}...", count, format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::MigrationHistoryEntry(version, name, applied_at) => {
                format!("  v{}: {} (applied: {})", version, name, applied_at)
            }
        };

        write!(f, "{}", text)
    }
}
