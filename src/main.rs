//! CLI entry point for blogkit

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blogkit")]
#[command(version)]
#[command(about = "Load, query and preview front-matter markdown blog posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts or categories
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only posts in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Show a single page of the listing (1-based)
        #[arg(short, long)]
        page: Option<usize>,
    },

    /// Show a single post by slug
    Show {
        slug: String,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        summary: Option<String>,
    },

    /// Export all posts as a JSON array
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start the JSON preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Disable reloading on file changes
        #[arg(long)]
        r#static: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogkit=debug,info"
    } else {
        "blogkit=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List {
            r#type,
            category,
            page,
        } => {
            let blog = blogkit::Blog::new(&base_dir)?;
            blogkit::commands::list::run(&blog, &r#type, category.as_deref(), page)?;
        }

        Commands::Show { slug } => {
            let blog = blogkit::Blog::new(&base_dir)?;
            blogkit::commands::show::run(&blog, &slug)?;
        }

        Commands::New {
            title,
            category,
            summary,
        } => {
            let blog = blogkit::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            blogkit::commands::new::run(&blog, &title, category.as_deref(), summary.as_deref())?;
        }

        Commands::Export { output } => {
            let blog = blogkit::Blog::new(&base_dir)?;
            blogkit::commands::export::run(&blog, output.as_deref())?;
        }

        Commands::Server { port, ip, r#static } => {
            let blog = blogkit::Blog::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            blogkit::server::start(&blog, &ip, port, !r#static).await?;
        }

        Commands::Version => {
            println!("blogkit version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
