//! Server-side HTML rendering.
//!
//! Templates load once at startup from a fixed directory; [`Renderer::render`]
//! executes one by name against a serializable model and hands back the
//! finished string. Rendering buffers fully before any response byte is
//! written, so a template failure becomes a clean 500 rather than truncated
//! HTML.
//!
//! Tera escapes expression output in `.html` templates, so a todo title of
//! `<b>x</b>` reaches the browser as text, not markup.

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::Result;

/// The template engine, loaded once and shared by every request.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Loads every `.html` template under `dir`. An unparsable template is
    /// fatal at startup, same as a malformed route pattern.
    pub fn new(dir: &str) -> Result<Self> {
        let tera = Tera::new(&format!("{dir}/**/*.html"))?;
        Ok(Self { tera })
    }

    /// Executes the named template against `model`.
    pub fn render<M: Serialize>(&self, name: &str, model: &M) -> Result<String> {
        let context = Context::from_serialize(model)?;
        Ok(self.tera.render(name, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::storage::Todo;
    use std::fs;

    #[derive(Serialize)]
    struct Page {
        todos: Vec<Todo>,
    }

    fn renderer_with(template: &str) -> (tempfile::TempDir, Renderer) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), template).unwrap();
        let renderer = Renderer::new(dir.path().to_str().unwrap()).unwrap();
        (dir, renderer)
    }

    const LIST: &str = "{% for todo in todos %}<li>{{ todo.title }}</li>{% endfor %}";

    #[test]
    fn empty_model_renders_zero_entries() {
        let (_dir, renderer) = renderer_with(LIST);
        let html = renderer.render("index.html", &Page { todos: vec![] }).unwrap();
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn titles_appear_in_order() {
        let (_dir, renderer) = renderer_with(LIST);
        let todos = vec![
            Todo { id: 2, title: "newest".into() },
            Todo { id: 1, title: "oldest".into() },
        ];
        let html = renderer.render("index.html", &Page { todos }).unwrap();
        let newest = html.find("newest").unwrap();
        let oldest = html.find("oldest").unwrap();
        assert!(newest < oldest);
    }

    #[test]
    fn titles_are_html_escaped() {
        let (_dir, renderer) = renderer_with(LIST);
        let todos = vec![Todo { id: 1, title: "<b>x</b>".into() }];
        let html = renderer.render("index.html", &Page { todos }).unwrap();
        assert!(!html.contains("<b>x</b>"), "markup leaked: {html}");
        assert!(html.contains("&lt;b&gt;x&lt;"), "expected escaped title: {html}");
    }

    #[test]
    fn unknown_template_is_a_render_error() {
        let (_dir, renderer) = renderer_with(LIST);
        let err = renderer.render("missing.html", &Page { todos: vec![] }).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }
}
