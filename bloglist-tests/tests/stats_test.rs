use bloglist_core::stats::{self, AuthorLikes, AuthorPostCount};
use bloglist_core::Blog;
use bloglist_test_utils::{big_blog_list, blog};
use proptest::prelude::*;

#[test]
fn total_likes_of_empty_list_is_zero() {
    assert_eq!(stats::total_likes(&[]), Some(0));
}

#[test]
fn total_likes_of_one_blog_equals_its_likes() {
    let blogs = [blog(
        "Test 2nd blog title",
        "Test of blog author",
        "Test of blog url",
        6,
    )];
    assert_eq!(stats::total_likes(&blogs), Some(6));
}

#[test]
fn total_likes_of_a_bigger_list_is_calculated_right() {
    assert_eq!(stats::total_likes(&big_blog_list()), Some(36));
}

#[test]
fn favorite_of_a_bare_record_is_that_record() {
    let blogs = [Blog::default()];
    assert_eq!(stats::favorite_blog(&blogs), Blog::default());
}

#[test]
fn favorite_of_one_blog_is_that_blog() {
    let blogs = [blog(
        "Test 2nd blog title",
        "Test of blog author",
        "Test of blog url",
        6,
    )];
    let favorite = stats::favorite_blog(&blogs);
    assert_eq!(favorite.likes, Some(6));
    assert_eq!(favorite, blogs[0]);
}

#[test]
fn favorite_of_a_bigger_list_is_the_first_maximum() {
    let blogs = big_blog_list();
    let favorite = stats::favorite_blog(&blogs);
    assert_eq!(favorite, blogs[0]);
    assert_eq!(favorite.likes, Some(12));
}

#[test]
fn prolific_author_of_a_bare_record_has_no_author() {
    let blogs = [Blog::default()];
    assert_eq!(
        stats::most_prolific_author(&blogs),
        AuthorPostCount {
            author: None,
            count: 1
        }
    );
}

#[test]
fn prolific_author_of_one_blog_counts_one() {
    let blogs = [blog(
        "Type wars",
        "Robert C. Martin",
        "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html",
        2,
    )];
    assert_eq!(
        stats::most_prolific_author(&blogs),
        AuthorPostCount {
            author: Some("Robert C. Martin".to_string()),
            count: 1
        }
    );
}

#[test]
fn prolific_author_of_a_bigger_list() {
    assert_eq!(
        stats::most_prolific_author(&big_blog_list()),
        AuthorPostCount {
            author: Some("Robert C. Martin".to_string()),
            count: 3
        }
    );
}

#[test]
fn liked_author_of_a_bare_record_has_no_likes() {
    let blogs = [Blog::default()];
    assert_eq!(
        stats::most_liked_author(&blogs),
        AuthorLikes {
            author: None,
            likes: None
        }
    );
}

#[test]
fn liked_author_of_one_blog_is_that_author() {
    let blogs = [blog(
        "Type wars",
        "Robert C. Martin",
        "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html",
        2,
    )];
    assert_eq!(
        stats::most_liked_author(&blogs),
        AuthorLikes {
            author: Some("Robert C. Martin".to_string()),
            likes: Some(2)
        }
    );
}

#[test]
fn liked_author_of_a_bigger_list() {
    assert_eq!(
        stats::most_liked_author(&big_blog_list()),
        AuthorLikes {
            author: Some("Edsger W. Dijkstra".to_string()),
            likes: Some(17)
        }
    );
}

#[test]
fn operations_are_idempotent_over_unchanged_input() {
    let blogs = big_blog_list();
    assert_eq!(stats::total_likes(&blogs), stats::total_likes(&blogs));
    assert_eq!(stats::favorite_blog(&blogs), stats::favorite_blog(&blogs));
    assert_eq!(
        stats::most_prolific_author(&blogs),
        stats::most_prolific_author(&blogs)
    );
    assert_eq!(
        stats::most_liked_author(&blogs),
        stats::most_liked_author(&blogs)
    );
}

#[test]
fn tied_authors_resolve_by_input_order() {
    let first = blog("a", "Michael Chan", "https://a.example", 3);
    let second = blog("b", "Edsger W. Dijkstra", "https://b.example", 3);

    let forward = [first.clone(), second.clone()];
    let backward = [second, first];

    assert_eq!(
        stats::most_liked_author(&forward).author.as_deref(),
        Some("Michael Chan")
    );
    assert_eq!(
        stats::most_liked_author(&backward).author.as_deref(),
        Some("Edsger W. Dijkstra")
    );
}

fn arb_blog() -> impl Strategy<Value = Blog> {
    (
        proptest::option::of(0u8..4),
        proptest::option::of(0u64..1000),
    )
        .prop_map(|(author, likes)| Blog {
            author: author.map(|n| format!("author-{}", n)),
            likes,
            ..Default::default()
        })
}

proptest! {
    // Sums do not depend on input order; only tie-break selection does.
    #[test]
    fn like_sums_are_order_independent(
        (original, shuffled) in proptest::collection::vec(arb_blog(), 0..32)
            .prop_flat_map(|blogs| (Just(blogs.clone()), Just(blogs).prop_shuffle()))
    ) {
        prop_assert_eq!(
            stats::total_likes(&original),
            stats::total_likes(&shuffled)
        );
        prop_assert_eq!(
            stats::most_liked_author(&original).likes,
            stats::most_liked_author(&shuffled).likes
        );
    }
}
