//! Raw todo input as collected from the user, and its validation.
//!
//! A [`TodoForm`] carries text exactly as typed so that a rejected form can be
//! shown again with nothing lost. [`TodoForm::validate`] turns it into a
//! typed [`TodoInput`] or a list of per-field messages.

use super::error::ValidationErrors;
use super::todo::{Todo, TodoInput, DEFAULT_PRIORITY, TITLE_MAX_CHARS};
use crate::libs::messages::Message;
use crate::msg_error;
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoForm {
    pub title: String,
    pub notes: String,
    /// `YYYY-MM-DD`, empty for no due date.
    pub due_date: String,
    /// Empty means the default priority.
    pub priority: String,
    pub is_resolved: bool,
    pub owner: Option<i64>,
}

impl Default for TodoForm {
    fn default() -> Self {
        TodoForm {
            title: String::new(),
            notes: String::new(),
            due_date: String::new(),
            priority: DEFAULT_PRIORITY.to_string(),
            is_resolved: false,
            owner: None,
        }
    }
}

impl TodoForm {
    pub fn new(title: &str) -> Self {
        TodoForm {
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Prefilled form for editing an existing todo.
    pub fn from_todo(todo: &Todo) -> Self {
        TodoForm {
            title: todo.title.clone(),
            notes: todo.notes.clone(),
            due_date: todo.due_date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default(),
            priority: todo.priority.to_string(),
            is_resolved: todo.is_resolved,
            owner: todo.owner_id,
        }
    }

    pub fn validate(&self) -> Result<TodoInput, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.add("title", "This field is required.");
        } else {
            let chars = title.chars().count();
            if chars > TITLE_MAX_CHARS {
                errors.add(
                    "title",
                    format!("Ensure this value has at most {} characters (it has {}).", TITLE_MAX_CHARS, chars),
                );
            }
        }

        let priority = parse_priority(&self.priority).unwrap_or_else(|message| {
            errors.add("priority", message);
            DEFAULT_PRIORITY
        });

        let due_date = parse_due_date(&self.due_date).unwrap_or_else(|message| {
            errors.add("due_date", message);
            None
        });

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(TodoInput {
            owner_id: self.owner,
            title: title.to_string(),
            notes: self.notes.trim().to_string(),
            due_date,
            priority,
            is_resolved: self.is_resolved,
        })
    }

    /// Asks for every field in turn, starting from the current values.
    pub fn prompt(&self) -> Result<TodoForm> {
        let theme = ColorfulTheme::default();

        let title: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptTodoTitle.to_string())
            .with_initial_text(self.title.clone())
            .allow_empty(true)
            .interact_text()?;

        let notes: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptTodoNotes.to_string())
            .with_initial_text(self.notes.clone())
            .allow_empty(true)
            .interact_text()?;

        let due_date: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptTodoDueDate.to_string())
            .with_initial_text(self.due_date.clone())
            .allow_empty(true)
            .interact_text()?;

        let priority: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptTodoPriority.to_string())
            .with_initial_text(self.priority.clone())
            .allow_empty(true)
            .interact_text()?;

        let is_resolved = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptTodoResolved.to_string())
            .default(self.is_resolved)
            .interact()?;

        Ok(TodoForm {
            title,
            notes,
            due_date,
            priority,
            is_resolved,
            owner: self.owner,
        })
    }
}

/// Prints one line per rejected field.
pub fn report(errors: &ValidationErrors) {
    for error in errors.iter() {
        msg_error!(Message::FieldInvalid(error.field.to_string(), error.message.clone()));
    }
}

fn parse_priority(value: &str) -> std::result::Result<u32, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(DEFAULT_PRIORITY);
    }

    let number: i64 = value.parse().map_err(|_| "Enter a whole number.".to_string())?;
    if number < 0 {
        return Err("Ensure this value is greater than or equal to 0.".to_string());
    }
    u32::try_from(number).map_err(|_| format!("Ensure this value is less than or equal to {}.", u32::MAX))
}

fn parse_due_date(value: &str) -> std::result::Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| "Enter a valid date.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_a_bare_title() {
        let input = TodoForm::new("Book flights").validate().unwrap();
        assert_eq!(input.title, "Book flights");
        assert_eq!(input.notes, "");
        assert_eq!(input.due_date, None);
        assert_eq!(input.priority, DEFAULT_PRIORITY);
        assert!(!input.is_resolved);
        assert_eq!(input.owner_id, None);
    }

    #[test]
    fn empty_priority_means_default() {
        let form = TodoForm {
            priority: "  ".to_string(),
            ..TodoForm::new("Book flights")
        };
        assert_eq!(form.validate().unwrap().priority, DEFAULT_PRIORITY);
    }

    #[test]
    fn blank_title_is_required() {
        let errors = TodoForm::new("   ").validate().unwrap_err();
        assert_eq!(errors.messages("title"), vec!["This field is required."]);
    }

    #[test]
    fn title_length_counts_characters() {
        assert!(TodoForm::new(&"é".repeat(200)).validate().is_ok());

        let errors = TodoForm::new(&"é".repeat(201)).validate().unwrap_err();
        assert_eq!(errors.messages("title"), vec!["Ensure this value has at most 200 characters (it has 201)."]);
    }

    #[test]
    fn every_bad_field_is_reported() {
        let form = TodoForm {
            title: String::new(),
            notes: "kept".to_string(),
            due_date: "2025-02-30".to_string(),
            priority: "-1".to_string(),
            is_resolved: false,
            owner: None,
        };

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains("title"));
        assert_eq!(errors.messages("due_date"), vec!["Enter a valid date."]);
        assert_eq!(errors.messages("priority"), vec!["Ensure this value is greater than or equal to 0."]);
    }

    #[test]
    fn priority_must_be_a_whole_number() {
        for bad in ["high", "1.5", "99999999999999999999"] {
            let form = TodoForm {
                priority: bad.to_string(),
                ..TodoForm::new("Pay invoices")
            };
            assert_eq!(form.validate().unwrap_err().messages("priority"), vec!["Enter a whole number."], "{bad}");
        }

        let form = TodoForm {
            priority: "4294967296".to_string(),
            ..TodoForm::new("Pay invoices")
        };
        assert!(form.validate().unwrap_err().contains("priority"));
    }

    #[test]
    fn fields_are_trimmed_and_typed() {
        let form = TodoForm {
            title: "  Draft blog post ".to_string(),
            notes: " Outline sections\n".to_string(),
            due_date: " 2025-01-31 ".to_string(),
            priority: "2".to_string(),
            is_resolved: true,
            owner: Some(7),
        };

        let input = form.validate().unwrap();
        assert_eq!(input.title, "Draft blog post");
        assert_eq!(input.notes, "Outline sections");
        assert_eq!(input.due_date, NaiveDate::from_ymd_opt(2025, 1, 31));
        assert_eq!(input.priority, 2);
        assert!(input.is_resolved);
        assert_eq!(input.owner_id, Some(7));
    }
}
