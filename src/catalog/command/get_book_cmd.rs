use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::BookRecord;
use crate::core::command::{Command, CommandError};
use crate::core::library::{coerce_number, LibraryError};

pub struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GetBookCommandRequest {
    #[serde(default)]
    pub id: Option<String>,
}

impl GetBookCommandRequest {
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
pub struct GetBookCommandResponse {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
}

impl From<BookRecord> for GetBookCommandResponse {
    fn from(book: BookRecord) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            year: book.year,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        let id = req.book_id().ok_or_else(LibraryError::book_not_found)?;
        self.catalog_service.find_book_by_id(id)
            .await.map_err(CommandError::from).map(GetBookCommandResponse::from)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
    use crate::catalog::factory;
    use crate::catalog::store::{CatalogStore, IdAssignment};
    use crate::core::command::{Command, CommandError};

    fn build_command() -> GetBookCommand {
        GetBookCommand::new(factory::create_catalog_service(Arc::new(CatalogStore::seeded(IdAssignment::Monotonic))))
    }

    #[tokio::test]
    async fn test_should_run_get_book() {
        let get_cmd = build_command();
        let loaded = get_cmd.execute(GetBookCommandRequest::new("1")).await.expect("should get book");
        assert_eq!(GetBookCommandResponse {
            id: 1,
            title: Some("SOAP for Beginners".to_string()),
            author: Some("John Doe".to_string()),
            year: Some(2023),
        }, loaded);
    }

    #[tokio::test]
    async fn test_should_coerce_textual_id() {
        let get_cmd = build_command();
        let loaded = get_cmd.execute(GetBookCommandRequest::new(" 1.0 ")).await.expect("should get book");
        assert_eq!(1, loaded.id);
        let loaded = get_cmd.execute(GetBookCommandRequest::new("0x1")).await.expect("should get book");
        assert_eq!(1, loaded.id);
    }

    #[tokio::test]
    async fn test_should_not_find_malformed_or_missing_id() {
        let get_cmd = build_command();
        for req in [GetBookCommandRequest::new("abc"), GetBookCommandRequest::new("2"), GetBookCommandRequest::default()] {
            let err = get_cmd.execute(req).await.expect_err("should not find book");
            assert_eq!(CommandError::NotFound { message: "Book not found".to_string() }, err);
        }
    }
}
