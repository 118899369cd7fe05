use std::sync::Arc;
use crate::books::domain::BooksService;
use crate::books::domain::service::BooksServiceImpl;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;

pub fn create_book_repository() -> Box<dyn BookRepository> {
    Box::new(MemoryBookRepository::new("books"))
}

pub fn create_books_service() -> Arc<dyn BooksService> {
    Arc::new(BooksServiceImpl::new(create_book_repository()))
}
