pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, CreateBookDto};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait BooksService: Sync + Send {
    async fn add_book(&self, book: &CreateBookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: i64) -> LibraryResult<()>;
    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto>;
    async fn find_books(&self, author: Option<&str>) -> LibraryResult<Vec<BookDto>>;
}
