use std::collections::HashMap;
use async_trait::async_trait;
use parking_lot::RwLock;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

const QUERYABLE: [&str; 4] = ["id", "title", "author", "year"];

#[derive(Debug, Default)]
struct Table {
    rows: Vec<BookEntity>,
    sequence: i64,
}

// MemoryBookRepository keeps the books table in process memory with an
// auto-increment key, standing in for the relational store.
#[derive(Debug)]
pub struct MemoryBookRepository {
    table_name: String,
    table: RwLock<Table>,
}

impl MemoryBookRepository {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            table: RwLock::new(Table::default()),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut table = self.table.write();
        table.sequence += 1;
        let mut row = entity.clone();
        row.id = table.sequence;
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        let table = self.table.read();
        table.rows.iter().find(|b| b.id == id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("{} {} not found", self.table_name, id).as_str()))
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        let mut table = self.table.write();
        let before = table.rows.len();
        table.rows.retain(|b| b.id != id);
        Ok(before - table.rows.len())
    }

    async fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<BookEntity>> {
        if let Some(key) = predicate.keys().find(|k| !QUERYABLE.contains(&k.as_str())) {
            return Err(LibraryError::validation(
                format!("cannot query {} by {}", self.table_name, key).as_str(), None));
        }
        let table = self.table.read();
        Ok(table.rows.iter()
            .filter(|b| predicate.iter().all(|(k, v)| b.attribute(k).as_deref() == Some(v.as_str())))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_author(&self, author: &str) -> LibraryResult<Vec<BookEntity>> {
        self.query(&HashMap::from([("author".to_string(), author.to_string())])).await
    }
}
