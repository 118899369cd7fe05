use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::utils::date::serializer;

// BookEntity is the persisted book served by the REST api; the key is assigned by
// the repository on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub id: i64,
    pub title: String,
    pub author: Option<String>,
    pub year: Option<i64>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(title: &str, author: Option<&str>, year: Option<i64>) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: 0,
            title: title.to_string(),
            author: author.map(str::to_string),
            year,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.to_string()),
            "title" => Some(self.title.to_string()),
            "author" => self.author.clone(),
            "year" => self.year.map(|y| y.to_string()),
            _ => None,
        }
    }
}
