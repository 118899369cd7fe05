use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::date::serializer;

// BookDto is the json shape of a book returned by the REST api
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub year: Option<i64>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id,
            title: other.title.to_string(),
            author: other.author.clone(),
            year: other.year,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

// CreateBookDto is the body accepted when creating a book
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CreateBookDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub year: Option<i64>,
}

impl CreateBookDto {
    pub fn new(title: &str, author: Option<&str>, year: Option<i64>) -> Self {
        Self {
            title: Some(title.to_string()),
            author: author.map(str::to_string),
            year,
        }
    }

    pub fn build_book(&self) -> LibraryResult<BookEntity> {
        let title = self.title.as_deref().ok_or_else(|| LibraryError::validation(
            "notNull Violation: Book.title cannot be null", Some("title".to_string())))?;
        Ok(BookEntity::new(title, self.author.as_deref(), self.year))
    }
}
