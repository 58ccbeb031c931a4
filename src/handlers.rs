//! The four request handlers.
//!
//! Each one is a single linear request→response transaction: at most one
//! storage call, then a page render or a redirect. Handlers receive their
//! dependencies as an explicit [`App`] value captured at registration —
//! there is no process-wide state to reach for.
//!
//! Storage and render failures never escape a handler: they are logged and
//! turned into a 500 whose body is the failure's message text.

use std::io;
use std::sync::Arc;

use serde::Serialize;
use tracing::error;

use crate::error::Result;
use crate::request::Request;
use crate::response::Response;
use crate::storage::{Storage, Todo};
use crate::view::Renderer;

/// Everything a handler needs, wired together in `main` and shared behind
/// one `Arc`.
pub struct App {
    pub storage: Storage,
    pub renderer: Renderer,
}

/// Model handed to the list template.
#[derive(Serialize)]
struct TodoPage {
    todos: Vec<Todo>,
}

/// `GET /` — render the whole list, newest first.
pub async fn home(app: Arc<App>, _req: Request) -> Response {
    match render_list(&app).await {
        Ok(html) => Response::html(html),
        Err(e) => {
            error!("list failed: {e}");
            Response::server_error(e.to_string())
        }
    }
}

async fn render_list(app: &App) -> Result<String> {
    let todos = app.storage.list_all().await?;
    app.renderer.render("index.html", &TodoPage { todos })
}

/// `POST /save/` — insert the submitted `title`, then bounce back to `/`.
///
/// An absent field inserts the empty string rather than rejecting the
/// request; the table is the only validator this application has.
pub async fn save(app: Arc<App>, req: Request) -> Response {
    let title = req.form_value("title").unwrap_or_default();
    match app.storage.insert(&title).await {
        Ok(()) => Response::redirect("/"),
        Err(e) => {
            error!("insert failed: {e}");
            Response::server_error(e.to_string())
        }
    }
}

/// `GET /clear/` — delete every todo, then bounce back to `/`. Idempotent.
pub async fn clear(app: Arc<App>, _req: Request) -> Response {
    match app.storage.clear_all().await {
        Ok(()) => Response::redirect("/"),
        Err(e) => {
            error!("clear failed: {e}");
            Response::server_error(e.to_string())
        }
    }
}

/// `GET` on any asset-extension path — the file at that path, relative to
/// the working directory.
///
/// The route pattern decides what reaches this handler; beyond stripping
/// the leading slash there is no path sanitization here.
pub async fn assets(req: Request) -> Response {
    let rel = req.path().trim_start_matches('/');
    match tokio::fs::read(rel).await {
        Ok(body) => Response::bytes(content_type_for(rel), body),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Response::not_found(),
        Err(e) => {
            error!("asset read failed for {rel}: {e}");
            Response::server_error(e.to_string())
        }
    }
}

fn content_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ttf") => "font/ttf",
        Some("woff") => "font/woff",
        _ => "application/octet-stream",
    }
}
