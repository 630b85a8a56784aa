//! Book Service - Pure business logic without HTTP layer
//!
//! Every operation validates its input before the repository is touched, so a
//! rejected request never reaches the store.

use serde_json::Value;

use crate::domain::{BookInput, BookRepository, DomainError};
use crate::models::Book;
use crate::models::book::{BookFormat, BookPayload, Category, EnumMember, ReadingStatus};

pub const INVALID_BOOK_ID: &str = "Invalid book ID";
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";

/// Parse a path segment as a base-10 book id.
pub fn parse_book_id(raw: &str) -> Result<i32, DomainError> {
    raw.parse::<i32>()
        .map_err(|_| DomainError::validation(INVALID_BOOK_ID))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Text exactly as sent, or `None` when absent or whitespace-only.
fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !is_blank(v))
}

fn parse_member<E: EnumMember>(field: &str, raw: &Value) -> Result<E, DomainError> {
    raw.as_str()
        .and_then(E::parse)
        .ok_or_else(|| DomainError::validation(format!("Invalid {} enum", field)))
}

/// Check a create/update body and turn it into the write model.
///
/// Text passes through unchanged; blank text counts as absent. An optional
/// enum is rejected only when present and not a member; absence means `NULL`
/// (format) or the default (status).
pub fn validate_book_payload(payload: BookPayload) -> Result<BookInput, DomainError> {
    let category = payload
        .category
        .filter(|raw| raw.as_str().is_none_or(|s| !is_blank(s)));

    let (Some(title), Some(author), Some(category)) = (
        optional_text(payload.title),
        optional_text(payload.author),
        category,
    ) else {
        return Err(DomainError::validation(MISSING_REQUIRED_FIELDS));
    };

    let category = parse_member::<Category>("category", &category)?;

    let status = match payload.status {
        Some(raw) => parse_member::<ReadingStatus>("status", &raw)?,
        None => ReadingStatus::default(),
    };

    let format = payload
        .format
        .map(|raw| parse_member::<BookFormat>("format", &raw))
        .transpose()?;

    let language_code = optional_text(payload.language_code);
    if let Some(code) = &language_code
        && code.trim().chars().count() < 2
    {
        return Err(DomainError::validation("Invalid languageCode"));
    }

    Ok(BookInput {
        title,
        author,
        category,
        genre: optional_text(payload.genre),
        form: optional_text(payload.form),
        format,
        language_code,
        translator: optional_text(payload.translator),
        status,
        notes: optional_text(payload.notes),
    })
}

/// List all books, most recently added first
pub async fn list_books(repo: &dyn BookRepository) -> Result<Vec<Book>, DomainError> {
    repo.find_all().await
}

/// Get a single book by its raw path id
pub async fn get_book(repo: &dyn BookRepository, raw_id: &str) -> Result<Book, DomainError> {
    let id = parse_book_id(raw_id)?;
    repo.find_by_id(id).await?.ok_or(DomainError::NotFound)
}

/// Create a new book
pub async fn create_book(
    repo: &dyn BookRepository,
    payload: BookPayload,
) -> Result<Book, DomainError> {
    let input = validate_book_payload(payload)?;
    repo.create(input).await
}

/// Replace every field of an existing book
pub async fn update_book(
    repo: &dyn BookRepository,
    raw_id: &str,
    payload: BookPayload,
) -> Result<Book, DomainError> {
    let id = parse_book_id(raw_id)?;
    let input = validate_book_payload(payload)?;
    repo.update(id, input).await
}

/// Delete a book, returning the removed record
pub async fn delete_book(repo: &dyn BookRepository, raw_id: &str) -> Result<Book, DomainError> {
    let id = parse_book_id(raw_id)?;
    repo.delete(id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str, author: &str, category: &str) -> BookPayload {
        BookPayload {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            category: Some(Value::from(category)),
            ..Default::default()
        }
    }

    fn payload_with_category(category: Value) -> BookPayload {
        BookPayload {
            category: Some(category),
            ..payload("Dune", "Herbert", "")
        }
    }

    fn validation_message(err: DomainError) -> String {
        match err {
            DomainError::Validation(msg) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_book_id() {
        assert_eq!(parse_book_id("42").unwrap(), 42);
        assert_eq!(parse_book_id("-3").unwrap(), -3);
        for raw in ["abc", "", "12abc", "1.5", " 7", "99999999999"] {
            let err = parse_book_id(raw).unwrap_err();
            assert_eq!(validation_message(err), INVALID_BOOK_ID, "input {:?}", raw);
        }
    }

    #[test]
    fn test_minimal_payload_gets_defaults() {
        let input = validate_book_payload(payload("Dune", "Herbert", "FICTION")).unwrap();

        assert_eq!(input, BookInput::new("Dune", "Herbert", Category::Fiction));
        assert_eq!(input.status, ReadingStatus::ToRead);
        assert_eq!(input.format, None);
    }

    #[test]
    fn test_missing_or_blank_required_fields() {
        let cases = [
            BookPayload::default(),
            BookPayload {
                category: None,
                ..payload("Dune", "Herbert", "FICTION")
            },
            payload("", "Herbert", "FICTION"),
            payload("Dune", "   ", "FICTION"),
            payload("Dune", "Herbert", ""),
        ];

        for case in cases {
            let err = validate_book_payload(case).unwrap_err();
            assert_eq!(validation_message(err), MISSING_REQUIRED_FIELDS);
        }
    }

    #[test]
    fn test_invalid_enum_members() {
        let err = validate_book_payload(payload("Dune", "Herbert", "SCI_FI")).unwrap_err();
        assert_eq!(validation_message(err), "Invalid category enum");

        let err = validate_book_payload(BookPayload {
            status: Some(Value::from("DONE")),
            ..payload("Dune", "Herbert", "FICTION")
        })
        .unwrap_err();
        assert_eq!(validation_message(err), "Invalid status enum");

        let err = validate_book_payload(BookPayload {
            format: Some(Value::from("KINDLE")),
            ..payload("Dune", "Herbert", "FICTION")
        })
        .unwrap_err();
        assert_eq!(validation_message(err), "Invalid format enum");
    }

    #[test]
    fn test_language_code_minimum_length() {
        let err = validate_book_payload(BookPayload {
            language_code: Some("e".to_string()),
            ..payload("Dune", "Herbert", "FICTION")
        })
        .unwrap_err();
        assert_eq!(validation_message(err), "Invalid languageCode");

        let input = validate_book_payload(BookPayload {
            language_code: Some("en".to_string()),
            ..payload("Dune", "Herbert", "FICTION")
        })
        .unwrap();
        assert_eq!(input.language_code.as_deref(), Some("en"));
    }

    #[test]
    fn test_non_string_enum_values_name_the_field() {
        let err = validate_book_payload(payload_with_category(Value::from(5))).unwrap_err();
        assert_eq!(validation_message(err), "Invalid category enum");

        let err = validate_book_payload(BookPayload {
            status: Some(Value::Bool(true)),
            ..payload("Dune", "Herbert", "FICTION")
        })
        .unwrap_err();
        assert_eq!(validation_message(err), "Invalid status enum");

        let err = validate_book_payload(BookPayload {
            format: Some(serde_json::json!(["EBOOK"])),
            ..payload("Dune", "Herbert", "FICTION")
        })
        .unwrap_err();
        assert_eq!(validation_message(err), "Invalid format enum");
    }

    #[test]
    fn test_text_is_stored_as_sent_and_blanks_become_none() {
        let notes = "  - a\n  - b\n";
        let input = validate_book_payload(BookPayload {
            title: Some("  The Stranger ".to_string()),
            author: Some("Camus".to_string()),
            category: Some(Value::from("FICTION")),
            genre: Some("".to_string()),
            form: Some(" Novel".to_string()),
            format: Some(Value::from("AUDIOBOOK")),
            language_code: Some("fr".to_string()),
            translator: Some("   ".to_string()),
            status: Some(Value::from("FINISHED")),
            notes: Some(notes.to_string()),
        })
        .unwrap();

        assert_eq!(input.title, "  The Stranger ");
        assert_eq!(input.genre, None);
        assert_eq!(input.form.as_deref(), Some(" Novel"));
        assert_eq!(input.format, Some(BookFormat::Audiobook));
        assert_eq!(input.translator, None);
        assert_eq!(input.status, ReadingStatus::Finished);
        assert_eq!(input.notes.as_deref(), Some(notes));
    }
}
