//! # sphere
//!
//! A todo list the old way: one MySQL table, one HTML template, four
//! routes, every page rendered on the server.
//!
//! Requests are dispatched by an ordered list of regex routes. First match
//! wins, so registration order *is* the routing policy — there is no
//! specificity scoring and no longest-match. The table, in order:
//!
//! | Verb | Pattern | Effect |
//! |---|---|---|
//! | GET  | `/clear/$` | delete every todo, redirect to `/` |
//! | POST | `/save/$`  | insert the form's `title`, redirect to `/` |
//! | GET  | `\.(js\|css\|png\|eof\|svg\|ttf\|woff)$` | the file at that path |
//! | GET  | `^/$`      | the rendered list |
//!
//! Anything else is a 404. Storage or render failures inside a handler
//! become a 500 carrying the failure's message text; they never take the
//! process down.
//!
//! ## Running
//!
//! sphere reads `config.json` from the working directory:
//!
//! ```json
//! { "Host": "127.0.0.1", "Database": "sphere", "User": "root", "Password": "" }
//! ```
//!
//! and expects the table to exist already:
//!
//! ```sql
//! CREATE TABLE todos (
//!     id         BIGINT AUTO_INCREMENT PRIMARY KEY,
//!     title      TEXT NOT NULL,
//!     created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
//! );
//! ```
//!
//! Then `cargo run` and open <http://localhost:8100/>.

mod config;
mod error;
mod handlers;
mod request;
mod response;
mod router;
mod server;
mod storage;
mod view;

pub use config::Config;
pub use error::{Error, Result};
pub use handlers::{App, assets, clear, home, save};
pub use request::Request;
pub use response::Response;
pub use router::Router;
pub use server::Server;
pub use storage::{Storage, Todo};
pub use view::Renderer;
