//! Ordered-scan request router.
//!
//! Routes are (pattern, verb, handler) records kept in a `Vec`, in
//! registration order. Dispatch walks the list and the first record whose
//! regex matches the request path AND whose verb equals the request's verb
//! wins. That is the whole algorithm: no specificity scoring, no
//! longest-match, no per-verb trees. Registration order is therefore part
//! of the routing table's meaning — a broad pattern registered early
//! shadows everything behind it.
//!
//! Patterns are unanchored: `/clear/$` matches any path *ending* in
//! `/clear/`. Anchor explicitly (`^/$`) when a route should match one path
//! and nothing else.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use http::Method;
use regex::Regex;

use crate::request::Request;
use crate::response::Response;

/// A heap-allocated, type-erased future resolving to a [`Response`].
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// A type-erased handler, shared across concurrent requests.
///
/// Handlers capture their dependencies (the storage adapter, the renderer)
/// by closure at registration time. The router holds nothing but the table.
pub(crate) type BoxedHandler = Arc<dyn Fn(Request) -> BoxFuture + Send + Sync + 'static>;

struct Route {
    pattern: Regex,
    method: Method,
    handler: BoxedHandler,
}

/// The application routing table.
///
/// Build it once at startup and pass it to
/// [`Server::serve`](crate::Server::serve). Each [`Router::on`] call
/// returns `self` so registrations chain.
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route record.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex. Routes are registered
    /// before the listener opens, so a bad pattern stops the process from
    /// ever serving traffic.
    pub fn on<H, Fut>(mut self, method: Method, pattern: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid route pattern `{pattern}`: {e}"));
        self.routes.push(Route {
            pattern,
            method,
            handler: Arc::new(move |req| -> BoxFuture { Box::pin(handler(req)) }),
        });
        self
    }

    /// First-match-wins scan. `None` means no route claims the request and
    /// the caller answers 404.
    pub(crate) fn lookup(&self, method: &Method, path: &str) -> Option<BoxedHandler> {
        self.routes
            .iter()
            .find(|route| route.method == *method && route.pattern.is_match(path))
            .map(|route| Arc::clone(&route.handler))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
