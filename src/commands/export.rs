//! Export posts as JSON

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Blog;

/// Serialize the sorted post collection as a JSON array
pub fn to_json(blog: &Blog) -> Result<String> {
    let posts = blog.posts();
    Ok(serde_json::to_string_pretty(&posts)?)
}

/// Write the JSON export to `output`, or stdout when absent
pub fn run(blog: &Blog, output: Option<&Path>) -> Result<()> {
    let json = to_json(blog)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
            tracing::info!("Exported posts to {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
