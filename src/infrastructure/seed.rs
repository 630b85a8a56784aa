use crate::domain::{BookInput, BookRepository, DomainError};
use crate::models::book::{BookFormat, Category, ReadingStatus};

fn demo_books() -> Vec<BookInput> {
    let mut dune = BookInput::new("Dune", "Frank Herbert", Category::Fiction);
    dune.genre = Some("Science Fiction".to_owned());
    dune.form = Some("Novel".to_owned());
    dune.format = Some(BookFormat::Physical);
    dune.language_code = Some("en".to_owned());
    dune.status = ReadingStatus::Finished;

    let mut stranger = BookInput::new("L'Étranger", "Albert Camus", Category::Fiction);
    stranger.form = Some("Novel".to_owned());
    stranger.format = Some(BookFormat::Ebook);
    stranger.language_code = Some("fr".to_owned());
    stranger.status = ReadingStatus::Reading;

    let mut essays = BookInput::new("Essays", "Michel de Montaigne", Category::NonFiction);
    essays.form = Some("Essay".to_owned());
    essays.format = Some(BookFormat::Audiobook);
    essays.language_code = Some("en".to_owned());
    essays.translator = Some("M. A. Screech".to_owned());

    vec![dune, stranger, essays]
}

/// Insert a few demo books, only into an empty library.
pub async fn seed_demo_data(repo: &dyn BookRepository) -> Result<usize, DomainError> {
    if !repo.find_all().await?.is_empty() {
        tracing::info!("Library already has books, skipping demo data");
        return Ok(0);
    }

    let books = demo_books();
    let count = books.len();
    for book in books {
        repo.create(book).await?;
    }

    Ok(count)
}
