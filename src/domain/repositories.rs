//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::book::{Book, BookFormat, Category, ReadingStatus};

/// Validated field values written on create and on full-replace update.
///
/// Optional fields set to `None` are stored as `NULL`.
#[derive(Debug, Clone, PartialEq)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub category: Category,
    pub genre: Option<String>,
    pub form: Option<String>,
    pub format: Option<BookFormat>,
    pub language_code: Option<String>,
    pub translator: Option<String>,
    pub status: ReadingStatus,
    pub notes: Option<String>,
}

impl BookInput {
    /// Minimal input with every optional field absent and the default status.
    pub fn new(title: impl Into<String>, author: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            category,
            genre: None,
            form: None,
            format: None,
            language_code: None,
            translator: None,
            status: ReadingStatus::default(),
            notes: None,
        }
    }
}

/// Repository trait for Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books, most recently created first
    async fn find_all(&self) -> Result<Vec<Book>, DomainError>;

    /// Find a single book by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError>;

    /// Create a new book
    async fn create(&self, input: BookInput) -> Result<Book, DomainError>;

    /// Replace every field of an existing book
    async fn update(&self, id: i32, input: BookInput) -> Result<Book, DomainError>;

    /// Delete a book by ID, returning the removed record
    async fn delete(&self, id: i32) -> Result<Book, DomainError>;
}
