use async_trait::async_trait;
use crate::books::domain::BooksService;
use crate::books::dto::{BookDto, CreateBookDto};
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct BooksServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl BooksServiceImpl {
    pub(crate) fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl BooksService for BooksServiceImpl {
    async fn add_book(&self, book: &CreateBookDto) -> LibraryResult<BookDto> {
        let entity = book.build_book()?;
        self.book_repository.create(&entity).await.map(|b| BookDto::from(&b))
    }

    async fn remove_book(&self, id: i64) -> LibraryResult<()> {
        match self.book_repository.delete(id).await? {
            0 => Err(LibraryError::book_not_found()),
            _ => Ok(()),
        }
    }

    async fn find_book_by_id(&self, id: i64) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await
            .map(|b| BookDto::from(&b))
            .map_err(|err| match err {
                LibraryError::NotFound { .. } => LibraryError::book_not_found(),
                other => other,
            })
    }

    async fn find_books(&self, author: Option<&str>) -> LibraryResult<Vec<BookDto>> {
        let res = match author {
            Some(author) => self.book_repository.find_by_author(author).await?,
            None => self.book_repository.query(&Default::default()).await?,
        };
        Ok(res.iter().map(BookDto::from).collect())
    }
}
