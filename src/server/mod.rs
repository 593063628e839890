//! Preview server: serves the post collection as JSON with live reload

use anyhow::Result;
use axum::{
    extract::{
        ws::{Message, WebSocket},
        Path, Query, State, WebSocketUpgrade,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::content::Post;
use crate::helpers;
use crate::Blog;

/// Server state. Posts are loaded once and kept until the content changes.
pub struct ServerState {
    blog: Blog,
    posts: RwLock<Vec<Post>>,
    reload_tx: broadcast::Sender<()>,
}

impl ServerState {
    pub fn new(blog: Blog) -> Self {
        let posts = blog.load_posts();
        let (reload_tx, _) = broadcast::channel::<()>(16);
        Self {
            blog,
            posts: RwLock::new(posts),
            reload_tx,
        }
    }

    /// Current posts in discovery order
    fn snapshot(&self) -> Vec<Post> {
        self.posts
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Re-read the content directory and notify connected clients
    pub fn reload(&self) -> usize {
        let posts = self.blog.load_posts();
        let count = posts.len();
        *self
            .posts
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = posts;
        let _ = self.reload_tx.send(());
        count
    }
}

/// Query parameters for the post listing
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub page: Option<usize>,
}

/// A post with the fields a detail view displays
#[derive(Serialize)]
struct PostDetail {
    #[serde(flatten)]
    post: Post,
    #[serde(rename = "readingTime")]
    reading_time: String,
    #[serde(rename = "displayDate")]
    display_date: String,
}

impl PostDetail {
    fn new(post: &Post, words_per_minute: u32) -> Self {
        let mut post = post.clone();
        // Derived fields replace custom front-matter keys of the same name
        post.extra.shift_remove("readingTime");
        post.extra.shift_remove("displayDate");

        Self {
            reading_time: post.reading_time(words_per_minute),
            display_date: post.display_date(),
            post,
        }
    }
}

/// Build the router
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:slug", get(get_post))
        .route("/api/categories", get(list_categories))
        .route("/api/events", get(events_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the preview server
pub async fn start(blog: &Blog, ip: &str, port: u16, watch: bool) -> Result<()> {
    let state = Arc::new(ServerState::new(blog.clone()));
    let app = router(state.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    if watch {
        println!("Watching {} for changes...", blog.content_dir.display());
    }
    println!("Press Ctrl+C to stop.");

    if watch {
        let watched = state.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_and_reload(watched) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Watch the content directory and reload posts on change
fn watch_and_reload(state: Arc<ServerState>) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    // Create debouncer to avoid multiple rapid reloads
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    let content_dir = state.blog.content_dir.clone();
    if !content_dir.exists() {
        tracing::warn!("Content directory {:?} does not exist, not watching", content_dir);
        return Ok(());
    }
    debouncer
        .watcher()
        .watch(&content_dir, RecursiveMode::NonRecursive)?;
    tracing::debug!("Watching: {:?}", content_dir);

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant = events
                    .iter()
                    .any(|e| crate::content::is_markdown_file(&e.path));
                if !relevant {
                    continue;
                }

                for event in &events {
                    tracing::info!("File changed: {}", event.path.display());
                }
                let count = state.reload();
                tracing::info!("Reloaded {} posts", count);
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

async fn list_posts(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<ListParams>,
) -> Response {
    let posts = state.snapshot();
    let listing = state.blog.listing(&posts, params.category.as_deref());

    match params.page {
        Some(page) => Json(helpers::paginate(&listing, page, state.blog.config.per_page))
            .into_response(),
        None => Json(listing).into_response(),
    }
}

async fn get_post(State(state): State<Arc<ServerState>>, Path(slug): Path<String>) -> Response {
    let posts = state.snapshot();

    match helpers::find_by_slug(&posts, &slug) {
        Some(post) => {
            Json(PostDetail::new(post, state.blog.config.words_per_minute)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("post not found: {}", slug) })),
        )
            .into_response(),
    }
}

async fn list_categories(State(state): State<Arc<ServerState>>) -> Json<Vec<String>> {
    Json(helpers::categories(&state.snapshot()))
}

/// WebSocket handler that tells clients to refetch after a reload
async fn events_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let reload_rx = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| handle_events_socket(socket, reload_rx))
}

async fn handle_events_socket(mut socket: WebSocket, mut reload_rx: broadcast::Receiver<()>) {
    tracing::debug!("Reload client connected");

    loop {
        tokio::select! {
            result = reload_rx.recv() => {
                match result {
                    Ok(_) => {
                        if socket.send(Message::Text("reload".to_string())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                }
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }

    tracing::debug!("Reload client disconnected");
}
