use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::model::{BookPatch, BookRecord, NewBook};
use crate::core::library::{LibraryError, LibraryResult};

// IdAssignment selects how the catalog numbers new books.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum IdAssignment {
    // one more than the highest id ever handed out, ids are never reused
    Monotonic,
    // one more than the current number of books; can collide after a delete
    CollectionLength,
}

impl FromStr for IdAssignment {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monotonic" => Ok(IdAssignment::Monotonic),
            "length" | "collection_length" => Ok(IdAssignment::CollectionLength),
            other => Err(LibraryError::validation(
                format!("unknown id assignment {:?}", other).as_str(), Some("SOAP_ID_ASSIGNMENT".to_string()))),
        }
    }
}

impl Display for IdAssignment {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            IdAssignment::Monotonic => write!(f, "monotonic"),
            IdAssignment::CollectionLength => write!(f, "length"),
        }
    }
}

#[derive(Debug, Default)]
struct CatalogState {
    books: Vec<BookRecord>,
    last_id: i64,
}

/// In-memory catalog backing the SOAP operations.
///
/// Books are kept in insertion order. Every operation takes the single store lock
/// for its whole duration, so lookups never observe a half-applied create or delete.
#[derive(Debug)]
pub struct CatalogStore {
    id_assignment: IdAssignment,
    state: Mutex<CatalogState>,
}

impl CatalogStore {
    pub fn new(id_assignment: IdAssignment) -> Self {
        Self {
            id_assignment,
            state: Mutex::new(CatalogState::default()),
        }
    }

    /// Creates the store holding the fixture book every fresh process starts with.
    pub fn seeded(id_assignment: IdAssignment) -> Self {
        let store = Self::new(id_assignment);
        {
            let mut state = store.state.lock();
            state.books.push(BookRecord::new(1, NewBook::new("SOAP for Beginners", Some("John Doe"), Some(2023))));
            state.last_id = 1;
        }
        store
    }

    pub fn find(&self, id: i64) -> Option<BookRecord> {
        let state = self.state.lock();
        state.books.iter().find(|b| b.id == id).cloned()
    }

    pub fn insert(&self, draft: NewBook) -> LibraryResult<BookRecord> {
        let mut state = self.state.lock();
        let id = match self.id_assignment {
            IdAssignment::Monotonic => state.last_id.checked_add(1),
            IdAssignment::CollectionLength => i64::try_from(state.books.len()).ok().and_then(|len| len.checked_add(1)),
        }.ok_or_else(|| LibraryError::runtime(
            "no book id left to assign", Some(self.id_assignment.to_string())))?;
        state.last_id = state.last_id.max(id);
        let book = BookRecord::new(id, draft);
        state.books.push(book.clone());
        Ok(book)
    }

    pub fn update(&self, id: i64, patch: BookPatch) -> Option<BookRecord> {
        let mut state = self.state.lock();
        let book = state.books.iter_mut().find(|b| b.id == id)?;
        book.apply(patch);
        Some(book.clone())
    }

    pub fn remove(&self, id: i64) -> Option<BookRecord> {
        let mut state = self.state.lock();
        let index = state.books.iter().position(|b| b.id == id)?;
        Some(state.books.remove(index))
    }

    pub fn len(&self) -> usize {
        self.state.lock().books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().books.is_empty()
    }

    pub fn snapshot(&self) -> Vec<BookRecord> {
        self.state.lock().books.clone()
    }

    #[cfg(test)]
    pub(crate) fn set_last_id(&self, last_id: i64) {
        self.state.lock().last_id = last_id;
    }
}
