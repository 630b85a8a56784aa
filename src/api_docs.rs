use crate::api;
use crate::api::error::ErrorResponse;
use crate::models::book::{Book, BookFormat, BookPayload, Category, ReadingStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::books::list_books,
        api::books::get_book,
        api::books::create_book,
        api::books::update_book,
        api::books::delete_book,
    ),
    components(schemas(Book, BookPayload, Category, BookFormat, ReadingStatus, ErrorResponse)),
    tags(
        (name = "readlog", description = "Reading tracker API")
    )
)]
pub struct ApiDoc;
