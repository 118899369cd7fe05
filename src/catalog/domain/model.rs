use serde::{Deserialize, Serialize};

// BookRecord is a catalog entry served by the SOAP book service. It lives only in
// process memory and is unrelated to the persisted books behind the REST api.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: i64,
    // None when the book was created without a title
    pub title: Option<String>,
    pub author: Option<String>,
    // None when the supplied year was not numeric
    pub year: Option<i64>,
}

impl BookRecord {
    pub fn new(id: i64, draft: NewBook) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            year: draft.year,
        }
    }

    pub fn apply(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(author) = patch.author {
            self.author = Some(author);
        }
        if let Some(year) = patch.year {
            self.year = Some(year);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i64>,
}

impl NewBook {
    pub fn new(title: &str, author: Option<&str>, year: Option<i64>) -> Self {
        Self {
            title: Some(title.to_string()),
            author: author.map(str::to_string),
            year,
        }
    }
}

// BookPatch carries the fields to overwrite; a None field is left untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i64>,
}
