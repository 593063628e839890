//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Blog;

/// Scaffold a new post in the content directory and return its path
pub fn create_post(
    blog: &Blog,
    title: &str,
    category: Option<&str>,
    summary: Option<&str>,
) -> Result<PathBuf> {
    let now = chrono::Local::now();
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title: {:?}", title);
    }

    fs::create_dir_all(&blog.content_dir)?;

    // Generate filename
    let filename = blog
        .config
        .new_post_name
        .replace(":title", &slug)
        .replace(":year", &now.format("%Y").to_string())
        .replace(":month", &now.format("%m").to_string())
        .replace(":day", &now.format("%d").to_string())
        .replace(":i_month", &now.format("%-m").to_string())
        .replace(":i_day", &now.format("%-d").to_string());

    let file_path = blog.content_dir.join(&filename);

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let mut content = format!(
        "---\ntitle: {}\nslug: {}\ndate: {}\n",
        title,
        slug,
        now.format("%Y-%m-%d")
    );
    if let Some(category) = category {
        content.push_str(&format!("category: {}\n", category));
    }
    if let Some(summary) = summary {
        content.push_str(&format!("summary: {}\n", summary));
    }
    content.push_str("---\n\n");

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Run the new command
pub fn run(blog: &Blog, title: &str, category: Option<&str>, summary: Option<&str>) -> Result<()> {
    let path = create_post(blog, title, category, summary)?;
    println!("Created: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_post_round_trips_through_loader() {
        let tmp = TempDir::new().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();

        let path = create_post(&blog, "Hello World", Some("AI"), Some("First post")).unwrap();
        assert!(path.ends_with("hello-world.md"));

        let post = blog.post("hello-world").unwrap();
        assert_eq!(post.title.as_deref(), Some("Hello World"));
        assert_eq!(post.category.as_deref(), Some("AI"));
        assert_eq!(post.summary.as_deref(), Some("First post"));
        assert!(post.parse_date().is_some());
        assert_eq!(post.content, "");
    }

    #[test]
    fn test_create_post_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        create_post(&blog, "Twice", None, None).unwrap();
        assert!(create_post(&blog, "Twice", None, None).is_err());
    }

    #[test]
    fn test_create_post_needs_sluggable_title() {
        let tmp = TempDir::new().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        assert!(create_post(&blog, "???", None, None).is_err());
    }
}
