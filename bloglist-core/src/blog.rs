/// Blog document model
///
/// Documents come from a loosely-shaped store, so every attribute on `Blog`
/// is optional. Well-formed records (everything the HTTP layer stores) carry
/// all fields; the statistics functions must also accept records where
/// `author` or `likes` never made it into the document.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// A stored blog record.
///
/// Absent attributes are omitted from serialized JSON. Unknown incoming
/// attributes are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
}

/// Request shape for creating a blog.
///
/// `title` and `url` are required by `validate`; `likes` defaults to 0 when
/// the record is inserted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBlog {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

impl NewBlog {
    /// Check the required attributes.
    pub fn validate(&self) -> Result<()> {
        match &self.title {
            Some(title) if !title.trim().is_empty() => {}
            _ => return Err(Error::InvalidArgument("title is required".to_string())),
        }
        match &self.url {
            Some(url) if !url.trim().is_empty() => {}
            _ => return Err(Error::InvalidArgument("url is required".to_string())),
        }
        Ok(())
    }

    /// Materialize the stored record under the given id.
    /// Absent `likes` becomes 0 here, not earlier; the wire shape keeps the
    /// distinction so validation errors can report what the caller sent.
    pub fn into_blog(self, id: Uuid) -> Blog {
        Blog {
            id: Some(id),
            title: self.title,
            author: self.author,
            url: self.url,
            likes: Some(self.likes.unwrap_or(0)),
        }
    }
}

/// Partial update for an existing blog. Provided attributes replace the
/// stored ones; absent attributes are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

impl BlogPatch {
    /// Apply this patch to a stored record.
    pub fn apply(self, blog: &mut Blog) {
        if let Some(title) = self.title {
            blog.title = Some(title);
        }
        if let Some(author) = self.author {
            blog.author = Some(author);
        }
        if let Some(url) = self.url {
            blog.url = Some(url);
        }
        if let Some(likes) = self.likes {
            blog.likes = Some(likes);
        }
    }
}
