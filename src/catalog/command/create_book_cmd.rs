use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::NewBook;
use crate::core::command::{Command, CommandError};
use crate::core::library::coerce_number;

pub const BOOK_CREATED: &str = "Book created";

pub struct CreateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl CreateBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateBookCommandRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

impl CreateBookCommandRequest {
    pub fn new(title: &str, author: &str, year: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            year: Some(year.to_string()),
        }
    }

    // no validation: a missing title stays absent and a non-numeric year is dropped
    pub fn build_book(&self) -> NewBook {
        NewBook {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year.as_deref().and_then(coerce_number),
        }
    }
}


#[derive(Debug, PartialEq, Serialize)]
pub struct CreateBookCommandResponse {
    pub message: String,
    pub id: i64,
}

impl CreateBookCommandResponse {
    pub fn new(id: i64) -> Self {
        Self {
            message: BOOK_CREATED.to_string(),
            id,
        }
    }
}

#[async_trait]
impl Command<CreateBookCommandRequest, CreateBookCommandResponse> for CreateBookCommand {
    async fn execute(&self, req: CreateBookCommandRequest) -> Result<CreateBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(book).await
            .map_err(CommandError::from).map(|b| CreateBookCommandResponse::new(b.id))
    }
}
