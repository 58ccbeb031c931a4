//! Incoming HTTP request type.

use bytes::Bytes;
use http::{HeaderMap, Method};

/// An incoming HTTP request with its body fully collected.
///
/// Bodies here are a single form field or nothing, so the server collects
/// them up front; handlers never stream.
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Bytes,
}

impl Request {
    pub(crate) fn new(method: Method, path: String, headers: HeaderMap, body: Bytes) -> Self {
        Self { method, path, headers, body }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Case-insensitive header lookup. Values that are not UTF-8 read as
    /// absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a field from an `application/x-www-form-urlencoded` body.
    ///
    /// `None` when the body does not decode as a form or the field is not
    /// in it. Callers that want the submit-an-empty-input behavior map that
    /// to the empty string themselves.
    pub fn form_value(&self, key: &str) -> Option<String> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(&self.body).ok()?;
        pairs.into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}
