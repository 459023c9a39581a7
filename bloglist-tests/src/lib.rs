/// Shared fixtures for bloglist integration tests.

use bloglist_core::Blog;
use uuid::Uuid;

/// Build a well-formed blog record with a fresh id.
pub fn blog(title: &str, author: &str, url: &str, likes: u64) -> Blog {
    Blog {
        id: Some(Uuid::new_v4()),
        title: Some(title.to_string()),
        author: Some(author.to_string()),
        url: Some(url.to_string()),
        likes: Some(likes),
    }
}

/// The canonical six-record list used across the test suite.
///
/// Totals: 36 likes; the first record holds the maximum (12);
/// "Robert C. Martin" has the most records (3); "Edsger W. Dijkstra" has
/// the highest like sum (17).
pub fn big_blog_list() -> Vec<Blog> {
    vec![
        blog(
            "Canonical string reduction",
            "Edsger W. Dijkstra",
            "http://www.cs.utexas.edu/~EWD/transcriptions/EWD08xx/EWD808.html",
            12,
        ),
        blog("React patterns", "Michael Chan", "https://reactpatterns.com/", 7),
        blog(
            "Go To Statement Considered Harmful",
            "Edsger W. Dijkstra",
            "http://www.u.arizona.edu/~rubinson/copyright_violations/Go_To_Considered_Harmful.html",
            5,
        ),
        blog(
            "First class tests",
            "Robert C. Martin",
            "http://blog.cleancoder.com/uncle-bob/2017/05/05/TestDefinitions.htmll",
            10,
        ),
        blog(
            "TDD harms architecture",
            "Robert C. Martin",
            "http://blog.cleancoder.com/uncle-bob/2017/03/03/TDD-Harms-Architecture.html",
            0,
        ),
        blog(
            "Type wars",
            "Robert C. Martin",
            "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html",
            2,
        ),
    ]
}
