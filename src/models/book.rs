use sea_orm::entity::prelude::*;
use sea_orm::{ActiveEnum, Iterable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed string enumerations stored as TEXT.
///
/// The same definition drives payload validation, the SQL `CHECK` constraints
/// and the OpenAPI schemas.
pub trait EnumMember: ActiveEnum<Value = String> + Iterable + Sized {
    /// Exact, case-sensitive member lookup.
    fn parse(raw: &str) -> Option<Self> {
        Self::try_from_value(&raw.to_owned()).ok()
    }

    fn members() -> Vec<String> {
        Self::iter().map(|member| member.to_value()).collect()
    }
}

impl<T> EnumMember for T where T: ActiveEnum<Value = String> + Iterable {}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[sea_orm(string_value = "FICTION")]
    Fiction,
    #[sea_orm(string_value = "NON_FICTION")]
    NonFiction,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookFormat {
    #[sea_orm(string_value = "PHYSICAL")]
    Physical,
    #[sea_orm(string_value = "EBOOK")]
    Ebook,
    #[sea_orm(string_value = "AUDIOBOOK")]
    Audiobook,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadingStatus {
    #[default]
    #[sea_orm(string_value = "TO_READ")]
    ToRead,
    #[sea_orm(string_value = "READING")]
    Reading,
    #[sea_orm(string_value = "FINISHED")]
    Finished,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
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
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// DTO for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    #[schema(example = "Dune")]
    pub title: String,
    #[schema(example = "Frank Herbert")]
    pub author: String,
    pub category: Category,
    pub genre: Option<String>,
    #[schema(example = "Novel")]
    pub form: Option<String>,
    pub format: Option<BookFormat>,
    #[schema(example = "en")]
    pub language_code: Option<String>,
    pub translator: Option<String>,
    pub status: ReadingStatus,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author: model.author,
            category: model.category,
            genre: model.genre,
            form: model.form,
            format: model.format,
            language_code: model.language_code,
            translator: model.translator,
            status: model.status,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Unvalidated request body for create and update.
///
/// Enum fields arrive as raw JSON values so that a bad member, or a value of
/// the wrong JSON type, produces a field-specific error instead of a generic
/// body rejection. Unknown keys (`id`, `createdAt`, ...) are ignored so a
/// fetched book can be sent back as is.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[schema(example = "Dune")]
    pub title: Option<String>,
    #[schema(example = "Frank Herbert")]
    pub author: Option<String>,
    #[schema(value_type = Option<Category>, example = "FICTION")]
    pub category: Option<serde_json::Value>,
    pub genre: Option<String>,
    pub form: Option<String>,
    #[schema(value_type = Option<BookFormat>, example = "PHYSICAL")]
    pub format: Option<serde_json::Value>,
    #[schema(example = "en")]
    pub language_code: Option<String>,
    pub translator: Option<String>,
    #[schema(value_type = Option<ReadingStatus>, example = "TO_READ")]
    pub status: Option<serde_json::Value>,
    pub notes: Option<String>,
}
