//! SeaORM implementation of BookRepository

use async_trait::async_trait;
use chrono::SecondsFormat;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};

use crate::domain::{BookInput, BookRepository, DomainError};
use crate::models::Book;
use crate::models::book::{ActiveModel, Column, Entity as BookEntity};

/// Fixed-width UTC timestamps so that `created_at` sorts lexically.
fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// SeaORM-based implementation of BookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, DomainError> {
        let books = BookEntity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await?;

        tracing::debug!("DB query returned {} books", books.len());
        Ok(books.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError> {
        let book = BookEntity::find_by_id(id).one(&self.db).await?;
        Ok(book.map(Book::from))
    }

    async fn create(&self, input: BookInput) -> Result<Book, DomainError> {
        let now = now_timestamp();

        let new_book = ActiveModel {
            title: Set(input.title),
            author: Set(input.author),
            category: Set(input.category),
            genre: Set(input.genre),
            form: Set(input.form),
            format: Set(input.format),
            language_code: Set(input.language_code),
            translator: Set(input.translator),
            status: Set(input.status),
            notes: Set(input.notes),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = new_book.insert(&self.db).await?;
        tracing::info!("Created book {} ({:?})", result.id, result.title);
        Ok(Book::from(result))
    }

    async fn update(&self, id: i32, input: BookInput) -> Result<Book, DomainError> {
        let txn = self.db.begin().await?;

        let existing = BookEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.title = Set(input.title);
        active.author = Set(input.author);
        active.category = Set(input.category);
        active.genre = Set(input.genre);
        active.form = Set(input.form);
        active.format = Set(input.format);
        active.language_code = Set(input.language_code);
        active.translator = Set(input.translator);
        active.status = Set(input.status);
        active.notes = Set(input.notes);
        active.updated_at = Set(now_timestamp());

        let result = active.update(&txn).await?;
        txn.commit().await?;

        tracing::info!("Updated book {}", id);
        Ok(Book::from(result))
    }

    async fn delete(&self, id: i32) -> Result<Book, DomainError> {
        let txn = self.db.begin().await?;

        let existing = BookEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DomainError::NotFound)?;

        let result = BookEntity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }
        txn.commit().await?;

        tracing::info!("Deleted book {}", id);
        Ok(Book::from(existing))
    }
}
