use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::error::{ApiError, ErrorResponse, INVALID_REQUEST_BODY};
use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::models::Book;
use crate::models::book::BookPayload;
use crate::services::book_service;

// Listings must be re-fetched after any mutation
const NO_STORE: [(header::HeaderName, &str); 1] = [(header::CACHE_CONTROL, "no-store")];

fn read_payload(
    action: &'static str,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<BookPayload, ApiError> {
    match payload {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => {
            tracing::debug!("Rejected book body: {}", rejection.body_text());
            Err(ApiError::new(
                action,
                DomainError::validation(INVALID_REQUEST_BODY),
            ))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/books",
    responses(
        (status = 200, description = "All books, newest first", body = [Book]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let books = book_service::list_books(state.book_repo.as_ref())
        .await
        .map_err(|e| ApiError::new("fetch books", e))?;

    Ok((NO_STORE, Json(books)))
}

#[utoipa::path(
    get,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book", body = Book),
        (status = 400, description = "Invalid book ID", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let book = book_service::get_book(state.book_repo.as_ref(), &id)
        .await
        .map_err(|e| ApiError::new("fetch book", e))?;

    Ok((NO_STORE, Json(book)))
}

#[utoipa::path(
    post,
    path = "/api/books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    const ACTION: &str = "create book";

    let payload = read_payload(ACTION, payload)?;
    let book = book_service::create_book(state.book_repo.as_ref(), payload)
        .await
        .map_err(|e| ApiError::new(ACTION, e))?;

    Ok((StatusCode::CREATED, NO_STORE, Json(book)))
}

#[utoipa::path(
    put,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "Book id")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book replaced", body = Book),
        (status = 400, description = "Invalid id or fields", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    const ACTION: &str = "update book";

    // A bad id wins over a bad body
    book_service::parse_book_id(&id).map_err(|e| ApiError::new(ACTION, e))?;
    let payload = read_payload(ACTION, payload)?;

    let book = book_service::update_book(state.book_repo.as_ref(), &id, payload)
        .await
        .map_err(|e| ApiError::new(ACTION, e))?;

    Ok((NO_STORE, Json(book)))
}

#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "The removed book", body = Book),
        (status = 400, description = "Invalid book ID", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let book = book_service::delete_book(state.book_repo.as_ref(), &id)
        .await
        .map_err(|e| ApiError::new("delete book", e))?;

    Ok((NO_STORE, Json(book)))
}
