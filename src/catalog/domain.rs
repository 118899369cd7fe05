pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::catalog::domain::model::{BookPatch, BookRecord, NewBook};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: NewBook) -> LibraryResult<BookRecord>;
    async fn remove_book(&self, id: i64) -> LibraryResult<BookRecord>;
    async fn update_book(&self, id: i64, patch: BookPatch) -> LibraryResult<BookRecord>;
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookRecord>;
    async fn count_books(&self) -> usize;
}
