use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::BookPatch;
use crate::core::command::{Command, CommandError};
use crate::core::library::{coerce_number, LibraryError};

pub const BOOK_UPDATED: &str = "Book updated";

pub struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateBookCommandRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

impl UpdateBookCommandRequest {
    pub fn new(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn with_year(mut self, year: &str) -> Self {
        self.year = Some(year.to_string());
        self
    }

    pub fn book_id(&self) -> Option<i64> {
        self.id.as_deref().and_then(coerce_number)
    }

    // Empty text and a zero year count as not supplied and leave the stored value
    // alone; so does a year that is not numeric.
    pub fn build_patch(&self) -> BookPatch {
        BookPatch {
            title: self.title.clone().filter(|t| !t.is_empty()),
            author: self.author.clone().filter(|a| !a.is_empty()),
            year: self.year.as_deref().and_then(coerce_number).filter(|y| *y != 0),
        }
    }
}


#[derive(Debug, PartialEq, Serialize)]
pub struct UpdateBookCommandResponse {
    pub message: String,
    pub id: i64,
}

impl UpdateBookCommandResponse {
    pub fn new(id: i64) -> Self {
        Self {
            message: BOOK_UPDATED.to_string(),
            id,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let id = req.book_id().ok_or_else(LibraryError::book_not_found)?;
        self.catalog_service.update_book(id, req.build_patch()).await
            .map_err(CommandError::from).map(|b| UpdateBookCommandResponse::new(b.id))
    }
}
