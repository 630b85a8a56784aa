use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

use crate::models::book::{BookFormat, Category, EnumMember, ReadingStatus};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

/// `'A', 'B', ...` for use inside a SQL `IN (...)` check.
fn sql_members<E: EnumMember>() -> String {
    E::members()
        .iter()
        .map(|member| format!("'{}'", member))
        .collect::<Vec<_>>()
        .join(", ")
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // AUTOINCREMENT keeps SQLite from reusing ids of deleted rows
    let create_books = format!(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            category TEXT NOT NULL CHECK (category IN ({categories})),
            genre TEXT,
            form TEXT,
            format TEXT CHECK (format IS NULL OR format IN ({formats})),
            language_code TEXT,
            translator TEXT,
            status TEXT NOT NULL DEFAULT '{default_status}' CHECK (status IN ({statuses})),
            notes TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
        categories = sql_members::<Category>(),
        formats = sql_members::<BookFormat>(),
        statuses = sql_members::<ReadingStatus>(),
        default_status = sea_orm::ActiveEnum::to_value(&ReadingStatus::default()),
    );

    db.execute(Statement::from_string(
        db.get_database_backend(),
        create_books,
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_books_created_at ON books (created_at DESC, id DESC)"
            .to_owned(),
    ))
    .await?;

    tracing::debug!("Database schema is up to date");
    Ok(())
}
