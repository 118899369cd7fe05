use std::sync::Arc;
use async_trait::async_trait;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::{BookPatch, BookRecord, NewBook};
use crate::catalog::store::CatalogStore;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct CatalogServiceImpl {
    store: Arc<CatalogStore>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(store: Arc<CatalogStore>) -> Self {
        Self {
            store,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: NewBook) -> LibraryResult<BookRecord> {
        self.store.insert(book)
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<BookRecord> {
        self.store.remove(id).ok_or_else(LibraryError::book_not_found)
    }

    async fn update_book(&self, id: i64, patch: BookPatch) -> LibraryResult<BookRecord> {
        self.store.update(id, patch).ok_or_else(LibraryError::book_not_found)
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookRecord> {
        self.store.find(id).ok_or_else(LibraryError::book_not_found)
    }

    async fn count_books(&self) -> usize {
        self.store.len()
    }
}
