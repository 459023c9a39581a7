pub mod blogs;
pub mod stats;

pub use blogs::{create_blog, delete_blog, get_blog, list_blogs, update_blog};
pub use stats::{get_stats, health_check};
