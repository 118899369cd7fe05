use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{coerce_number, LibraryError};

pub const BOOK_DELETED: &str = "Book deleted";

pub struct DeleteBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl DeleteBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteBookCommandRequest {
    #[serde(default)]
    pub id: Option<String>,
}

impl DeleteBookCommandRequest {
    pub fn new(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
        }
    }

    pub fn book_id(&self) -> Option<i64> {
        self.id.as_deref().and_then(coerce_number)
    }
}


#[derive(Debug, PartialEq, Serialize)]
pub struct DeleteBookCommandResponse {
    pub message: String,
}

impl DeleteBookCommandResponse {
    pub fn new() -> Self {
        Self {
            message: BOOK_DELETED.to_string(),
        }
    }
}

impl Default for DeleteBookCommandResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Command<DeleteBookCommandRequest, DeleteBookCommandResponse> for DeleteBookCommand {
    async fn execute(&self, req: DeleteBookCommandRequest) -> Result<DeleteBookCommandResponse, CommandError> {
        let id = req.book_id().ok_or_else(LibraryError::book_not_found)?;
        self.catalog_service.remove_book(id).await
            .map_err(CommandError::from).map(|_| DeleteBookCommandResponse::new())
    }
}
