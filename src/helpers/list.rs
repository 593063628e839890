//! List helpers: sorting, filtering, lookup and paging over posts

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::content::Post;

/// Order of a date-sorted listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Sort posts by date, newest first. The input is left untouched.
pub fn sort_by_date_desc(posts: &[Post]) -> Vec<Post> {
    sort_by_date(posts, SortOrder::Desc)
}

/// Sort posts by date in the given order.
///
/// The sort is stable. Posts whose date is missing or unparseable come
/// after every dated post, whichever the order.
pub fn sort_by_date(posts: &[Post], order: SortOrder) -> Vec<Post> {
    let mut keyed: Vec<_> = posts.iter().map(|p| (p.parse_date(), p)).collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Desc => b.cmp(a),
            SortOrder::Asc => a.cmp(b),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, p)| p.clone()).collect()
}

/// Posts whose category matches case-insensitively.
/// An empty category returns every post.
pub fn filter_by_category(posts: &[Post], category: &str) -> Vec<Post> {
    if category.is_empty() {
        return posts.to_vec();
    }

    let wanted = category.to_lowercase();
    posts
        .iter()
        .filter(|p| {
            p.category
                .as_deref()
                .is_some_and(|c| c.to_lowercase() == wanted)
        })
        .cloned()
        .collect()
}

/// Distinct categories in first-seen order, skipping posts without one
pub fn categories(posts: &[Post]) -> Vec<String> {
    posts
        .iter()
        .filter_map(|p| p.category.as_deref())
        .filter(|c| !c.is_empty())
        .collect::<IndexSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// First post whose slug equals `slug` exactly
pub fn find_by_slug<'a>(posts: &'a [Post], slug: &str) -> Option<&'a Post> {
    if slug.is_empty() {
        return None;
    }
    posts.iter().find(|p| p.slug.as_deref() == Some(slug))
}

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostPage {
    pub items: Vec<Post>,
    /// 1-based page number
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Slice `posts` into the 1-based `page` of `per_page` items.
/// A `per_page` of zero puts everything on one page.
pub fn paginate(posts: &[Post], page: usize, per_page: usize) -> PostPage {
    let total = posts.len();
    let per_page = if per_page == 0 { total.max(1) } else { per_page };
    let total_pages = total.div_ceil(per_page);

    let items = if page == 0 {
        Vec::new()
    } else {
        posts
            .iter()
            .skip((page - 1).saturating_mul(per_page))
            .take(per_page)
            .cloned()
            .collect()
    };

    PostPage {
        items,
        page,
        per_page,
        total,
        total_pages,
        has_prev: page > 1,
        has_next: page < total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, date: Option<&str>, category: Option<&str>) -> Post {
        Post {
            slug: Some(slug.to_string()),
            date: date.map(str::to_string),
            category: category.map(str::to_string),
            filename: slug.to_string(),
            ..Default::default()
        }
    }

    fn slugs(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.route_key()).collect()
    }

    #[test]
    fn test_sort_newest_first() {
        let posts = vec![
            post("december", Some("2023-12-15"), None),
            post("march", Some("2024-03-01"), None),
        ];
        let sorted = sort_by_date_desc(&posts);
        assert_eq!(slugs(&sorted), vec!["march", "december"]);
        // Input untouched
        assert_eq!(slugs(&posts), vec!["december", "march"]);
    }

    #[test]
    fn test_sort_is_idempotent_and_keeps_length() {
        let posts = vec![
            post("a", Some("2022-01-01"), None),
            post("b", Some("garbage"), None),
            post("c", Some("2024-06-30"), None),
            post("d", None, None),
            post("e", Some("2024-06-30"), None),
        ];
        let once = sort_by_date_desc(&posts);
        let twice = sort_by_date_desc(&once);
        assert_eq!(once.len(), posts.len());
        assert_eq!(once, twice);
        assert_eq!(slugs(&once), vec!["c", "e", "a", "b", "d"]);
    }

    #[test]
    fn test_sort_ascending_keeps_undated_last() {
        let posts = vec![
            post("undated", None, None),
            post("new", Some("2024-02-01"), None),
            post("old", Some("2020-02-01"), None),
        ];
        let sorted = sort_by_date(&posts, SortOrder::Asc);
        assert_eq!(slugs(&sorted), vec!["old", "new", "undated"]);
    }

    #[test]
    fn test_filter_by_category() {
        let posts = vec![
            post("a", None, Some("AI")),
            post("b", None, Some("Tech Industry")),
            post("c", None, None),
            post("d", None, Some("ai")),
        ];
        assert_eq!(slugs(&filter_by_category(&posts, "Ai")), vec!["a", "d"]);
        assert_eq!(filter_by_category(&posts, ""), posts);
        assert!(filter_by_category(&posts, "Unknown").is_empty());
    }

    #[test]
    fn test_categories_distinct_in_order() {
        let posts = vec![
            post("a", None, Some("Tech Industry")),
            post("b", None, None),
            post("c", None, Some("AI")),
            post("d", None, Some("")),
            post("e", None, Some("Tech Industry")),
        ];
        assert_eq!(categories(&posts), vec!["Tech Industry", "AI"]);
    }

    #[test]
    fn test_find_by_slug() {
        let posts = vec![post("hello", None, None), post("Hello", None, None)];
        assert_eq!(find_by_slug(&posts, "Hello").map(|p| p.route_key()), Some("Hello"));
        assert!(find_by_slug(&posts, "HELLO").is_none());
        assert!(find_by_slug(&posts, "").is_none());
    }

    #[test]
    fn test_paginate() {
        let posts: Vec<_> = (0..20).map(|i| post(&i.to_string(), None, None)).collect();

        let first = paginate(&posts, 1, 9);
        assert_eq!(first.items.len(), 9);
        assert_eq!(first.total_pages, 3);
        assert!(!first.has_prev);
        assert!(first.has_next);

        let last = paginate(&posts, 3, 9);
        assert_eq!(slugs(&last.items), vec!["18", "19"]);
        assert!(last.has_prev);
        assert!(!last.has_next);

        assert!(paginate(&posts, 4, 9).items.is_empty());
        assert!(paginate(&posts, 0, 9).items.is_empty());
        assert_eq!(paginate(&posts, 1, 0).items.len(), 20);
        assert_eq!(paginate(&[], 1, 9).total_pages, 0);
    }
}
