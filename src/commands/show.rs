//! Show a single post

use anyhow::Result;

use crate::Blog;

/// Print a post's metadata and markdown body
pub fn run(blog: &Blog, slug: &str) -> Result<()> {
    let Some(post) = blog.post(slug) else {
        anyhow::bail!("No post with slug: {}", slug);
    };

    println!("{}", post.display_title());
    if post.date.is_some() {
        println!("Date:      {}", post.display_date());
    }
    if let Some(category) = &post.category {
        println!("Category:  {}", category);
    }
    println!(
        "Reading:   {}",
        post.reading_time(blog.config.words_per_minute)
    );
    println!("File:      {}", post.filename);
    for (key, value) in &post.extra {
        println!("{:<10} {}", format!("{}:", key), value);
    }
    if let Some(summary) = &post.summary {
        println!("\n{}", summary);
    }
    println!("\n{}", post.content);

    Ok(())
}
