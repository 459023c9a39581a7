pub mod error;
pub mod blog;
pub mod stats;
pub mod store;

pub use error::{Error, Result};
pub use blog::{Blog, BlogPatch, NewBlog};
pub use store::{MemoryStore, PostStore};
