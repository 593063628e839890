//! List blog content

use anyhow::Result;

use crate::content::Post;
use crate::helpers;
use crate::Blog;

/// List blog content by type
pub fn run(blog: &Blog, content_type: &str, category: Option<&str>, page: Option<usize>) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = blog.listing(&blog.load_posts(), category);
            match page {
                Some(page) => {
                    let page = helpers::paginate(&posts, page, blog.config.per_page);
                    println!(
                        "Posts (page {}/{}, {} total):",
                        page.page, page.total_pages, page.total
                    );
                    for post in &page.items {
                        println!("{}", post_line(blog, post));
                    }
                }
                None => {
                    println!("Posts ({}):", posts.len());
                    for post in &posts {
                        println!("{}", post_line(blog, post));
                    }
                }
            }
        }
        "category" | "categories" => {
            let posts = blog.load_posts();
            let categories = helpers::categories(&posts);
            println!("Categories ({}):", categories.len());
            for cat in categories {
                let count = helpers::filter_by_category(&posts, &cat).len();
                println!("  {} ({})", cat, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category",
                content_type
            );
        }
    }

    Ok(())
}

/// One listing line: date, title, slug and reading time
fn post_line(blog: &Blog, post: &Post) -> String {
    format!(
        "  {} - {} [{}] ({})",
        post.display_date(),
        post.display_title(),
        post.route_key(),
        post.reading_time(blog.config.words_per_minute)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_line() {
        let blog = Blog::with_config(".", Default::default());
        let post = Post {
            slug: Some("hello".to_string()),
            title: Some("Hello".to_string()),
            date: Some("2024-01-05".to_string()),
            content: "Body text here".to_string(),
            filename: "hello".to_string(),
            ..Default::default()
        };
        assert_eq!(
            post_line(&blog, &post),
            "  Jan 5, 2024 - Hello [hello] (1 min read)"
        );
    }

    #[test]
    fn test_unknown_type() {
        let blog = Blog::with_config(".", Default::default());
        assert!(run(&blog, "tags", None, None).is_err());
    }
}
