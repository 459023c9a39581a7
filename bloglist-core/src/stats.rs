/// List statistics over blog records
///
/// Pure functions over a slice of [`Blog`] records. Every operation is total:
/// degenerate input produces a documented sentinel value instead of an error,
/// and malformed records (absent `author` or `likes`) are never rejected.
/// Callers are responsible for record shape; these functions only report what
/// is there.
///
/// Ties are broken by first occurrence: when several candidates reach the
/// maximum, the one encountered earliest in the input wins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Blog;

/// The author with the most records, and how many.
///
/// For an empty input the author is absent and the count is 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorPostCount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub count: u64,
}

/// The author with the highest summed likes, and that sum.
///
/// For an empty input both attributes are absent. A group containing a
/// record without `likes` has an undefined sum, reported as an absent value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLikes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
}

/// Sum of `likes` across all records.
///
/// Empty input sums to 0. A record without `likes` makes the whole sum
/// undefined (`None`); absent likes are not treated as 0.
pub fn total_likes(blogs: &[Blog]) -> Option<u64> {
    blogs
        .iter()
        .try_fold(0u64, |sum, blog| blog.likes.map(|likes| sum + likes))
}

/// The record with the most likes, cloned verbatim.
///
/// Empty input yields the structurally empty record. A record without
/// `likes` ranks below every record that has them. First occurrence wins
/// ties.
pub fn favorite_blog(blogs: &[Blog]) -> Blog {
    let mut best: Option<&Blog> = None;
    for blog in blogs {
        match best {
            // Option ordering puts absent likes below Some(0)
            Some(current) if blog.likes <= current.likes => {}
            _ => best = Some(blog),
        }
    }
    best.cloned().unwrap_or_default()
}

/// The author with the most records.
///
/// Records without an author form their own group. First-occurrence order
/// decides ties. Empty input: no author, count stays 1.
pub fn most_prolific_author(blogs: &[Blog]) -> AuthorPostCount {
    let mut best: Option<AuthorPostCount> = None;
    for (author, members) in group_by_author(blogs) {
        let count = members.len() as u64;
        if best.as_ref().map_or(true, |current| count > current.count) {
            best = Some(AuthorPostCount { author, count });
        }
    }
    best.unwrap_or(AuthorPostCount {
        author: None,
        count: 1,
    })
}

/// The author whose records sum to the most likes.
///
/// Group sums follow the same rule as [`total_likes`]: a member without
/// `likes` leaves the group's sum undefined, and an undefined sum ranks
/// below any defined one. First-occurrence order decides ties. Empty input
/// yields no author and no sum.
pub fn most_liked_author(blogs: &[Blog]) -> AuthorLikes {
    let mut best: Option<AuthorLikes> = None;
    for (author, members) in group_by_author(blogs) {
        let likes = members
            .iter()
            .try_fold(0u64, |sum, blog| blog.likes.map(|likes| sum + likes));
        // Option ordering puts an undefined sum below any defined one
        if best.as_ref().map_or(true, |current| likes > current.likes) {
            best = Some(AuthorLikes { author, likes });
        }
    }
    best.unwrap_or(AuthorLikes {
        author: None,
        likes: None,
    })
}

/// Single pass grouping by author, preserving the order in which each
/// author first appears. The order is what makes tie-breaks deterministic.
fn group_by_author(blogs: &[Blog]) -> Vec<(Option<String>, Vec<&Blog>)> {
    let mut groups: Vec<(Option<String>, Vec<&Blog>)> = Vec::new();
    let mut index: HashMap<Option<&str>, usize> = HashMap::new();
    for blog in blogs {
        match index.get(&blog.author.as_deref()) {
            Some(&at) => groups[at].1.push(blog),
            None => {
                index.insert(blog.author.as_deref(), groups.len());
                groups.push((blog.author.clone(), vec![blog]));
            }
        }
    }
    groups
}
