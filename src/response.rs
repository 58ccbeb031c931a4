//! Outgoing HTTP response type.
//!
//! Constructors cover exactly the shapes this application produces: a
//! rendered page, a redirect back to `/`, raw file bytes, a 404, and a 500
//! carrying the failure's message text. At the end of dispatch the whole
//! thing converts into the `http::Response` hyper wants.

use bytes::Bytes;
use http::StatusCode;
use http_body_util::Full;

/// An outgoing HTTP response.
pub struct Response {
    pub(crate) status: StatusCode,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Vec<u8>,
}

impl Response {
    /// `200 OK` — `text/html; charset=utf-8`.
    pub fn html(body: String) -> Self {
        Self::with_body("text/html; charset=utf-8", body.into_bytes())
    }

    /// `302 Found` with a `location` header and no body.
    pub fn redirect(location: &str) -> Self {
        Self {
            status: StatusCode::FOUND,
            headers: vec![("location".to_owned(), location.to_owned())],
            body: Vec::new(),
        }
    }

    /// `200 OK` with an explicit content-type — raw file bytes.
    pub fn bytes(content_type: &str, body: Vec<u8>) -> Self {
        Self::with_body(content_type, body)
    }

    /// Response with the given status and no body.
    pub fn status(code: StatusCode) -> Self {
        Self { status: code, headers: Vec::new(), body: Vec::new() }
    }

    /// `404 Not Found` — plain text.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            headers: vec![("content-type".to_owned(), "text/plain; charset=utf-8".to_owned())],
            body: b"404 page not found".to_vec(),
        }
    }

    /// `500 Internal Server Error` carrying the failure's message text.
    ///
    /// The raw text goes to the client. Handlers log the failure through
    /// `tracing` before building this, so the detail is on the server side
    /// too.
    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            headers: vec![("content-type".to_owned(), "text/plain; charset=utf-8".to_owned())],
            body: message.into().into_bytes(),
        }
    }

    fn with_body(content_type: &str, body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::OK,
            headers: vec![("content-type".to_owned(), content_type.to_owned())],
            body,
        }
    }

    pub(crate) fn into_hyper(self) -> http::Response<Full<Bytes>> {
        let mut builder = http::Response::builder().status(self.status);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        // Header names and values only ever come from our own constructors.
        builder
            .body(Full::new(Bytes::from(self.body)))
            .expect("statically valid response parts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header<'a>(resp: &'a Response, name: &str) -> Option<&'a str> {
        resp.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn redirect_is_302_with_location() {
        let resp = Response::redirect("/");
        assert_eq!(resp.status, StatusCode::FOUND);
        assert_eq!(header(&resp, "location"), Some("/"));
        assert!(resp.body.is_empty());
    }

    #[test]
    fn html_sets_content_type() {
        let resp = Response::html("<p>hi</p>".to_owned());
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(header(&resp, "content-type"), Some("text/html; charset=utf-8"));
        assert_eq!(resp.body, b"<p>hi</p>");
    }

    #[test]
    fn server_error_carries_the_message() {
        let resp = Response::server_error("storage: connection refused");
        assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!resp.body.is_empty());
        assert_eq!(resp.body, b"storage: connection refused");
    }

    #[test]
    fn not_found_is_404() {
        let resp = Response::not_found();
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn converts_into_a_hyper_response() {
        let resp = Response::redirect("/").into_hyper();
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get("location").unwrap(), "/");
    }
}
