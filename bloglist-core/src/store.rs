/// Blog storage
///
/// Request handling code never talks to a concrete database; it receives a
/// [`PostStore`] capability and calls through it. The shipped implementation
/// keeps everything in memory and is dropped with the process.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::{Blog, BlogPatch, NewBlog, Result};

/// Storage capability for blog records.
pub trait PostStore: Send + Sync {
    /// All records, in insertion order.
    fn fetch_all(&self) -> Result<Vec<Blog>>;

    /// A single record by id.
    fn fetch(&self, id: Uuid) -> Result<Option<Blog>>;

    /// Store a new record under a fresh id. Absent `likes` becomes 0.
    fn insert(&self, new: NewBlog) -> Result<Blog>;

    /// Apply a patch to an existing record. Returns the updated record,
    /// or `None` when no record has the id.
    fn update(&self, id: Uuid, patch: BlogPatch) -> Result<Option<Blog>>;

    /// Delete a record. Returns whether one existed.
    fn remove(&self, id: Uuid) -> Result<bool>;
}

/// In-memory store.
///
/// A cheaply cloneable handle over shared state. Insertion order is
/// preserved, which keeps statistics tie-breaks deterministic across calls.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Vec<Blog>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records, keeping their order.
    pub fn with_blogs(blogs: Vec<Blog>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(blogs)),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl PostStore for MemoryStore {
    fn fetch_all(&self) -> Result<Vec<Blog>> {
        Ok(self.inner.read().clone())
    }

    fn fetch(&self, id: Uuid) -> Result<Option<Blog>> {
        let blogs = self.inner.read();
        Ok(blogs.iter().find(|blog| blog.id == Some(id)).cloned())
    }

    fn insert(&self, new: NewBlog) -> Result<Blog> {
        let id = Uuid::new_v4();
        let blog = new.into_blog(id);
        self.inner.write().push(blog.clone());
        debug!(%id, "stored blog");
        Ok(blog)
    }

    fn update(&self, id: Uuid, patch: BlogPatch) -> Result<Option<Blog>> {
        let mut blogs = self.inner.write();
        match blogs.iter_mut().find(|blog| blog.id == Some(id)) {
            Some(blog) => {
                patch.apply(blog);
                Ok(Some(blog.clone()))
            }
            None => Ok(None),
        }
    }

    fn remove(&self, id: Uuid) -> Result<bool> {
        let mut blogs = self.inner.write();
        let before = blogs.len();
        blogs.retain(|blog| blog.id != Some(id));
        Ok(blogs.len() < before)
    }
}
