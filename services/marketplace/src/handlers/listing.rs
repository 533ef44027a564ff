use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fitmarket_domain::pagination::PageRequest;

use crate::domain::types::{Author, Authored, Role};

/// `?author=&per-page=&page=` on catalog listings.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub author: Option<Uuid>,
    #[serde(rename = "per-page")]
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl ListQuery {
    pub fn page(&self) -> PageRequest {
        PageRequest::new(self.per_page, self.page)
    }
}

#[derive(Serialize)]
pub struct AuthorResponse {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
}

impl From<Author> for AuthorResponse {
    fn from(a: Author) -> Self {
        Self {
            id: a.id,
            name: a.name,
            role: a.role,
        }
    }
}

/// Splits a joined row into its item, display name and author.
pub fn split_author<T>(row: Authored<T>) -> (T, String, Option<AuthorResponse>) {
    let name = row.author_name().to_owned();
    (row.item, name, row.author.map(Into::into))
}
