//! Process entry point: config, pool, templates, routes, listen.
//!
//! Everything before the listener opens is fail-fast — a missing config
//! file, an unreachable database, or a broken template stops the process
//! with the error on stderr.

use std::sync::Arc;

use http::Method;
use sphere::{App, Config, Renderer, Router, Server, Storage};

const LISTEN_ADDR: &str = "0.0.0.0:8100";
const CONFIG_FILE: &str = "config.json";
const TEMPLATE_DIR: &str = "templates";

#[tokio::main]
async fn main() -> sphere::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load(CONFIG_FILE)?;
    let storage = Storage::connect(&config.database_url()).await?;
    let renderer = Renderer::new(TEMPLATE_DIR)?;

    let app = Arc::new(App { storage, renderer });

    // Scan order is routing policy: the asset pattern must come before the
    // home route, and nothing may shadow /clear/ and /save/.
    let router = Router::new()
        .on(Method::GET, r"/clear/$", {
            let app = Arc::clone(&app);
            move |req| sphere::clear(Arc::clone(&app), req)
        })
        .on(Method::POST, r"/save/$", {
            let app = Arc::clone(&app);
            move |req| sphere::save(Arc::clone(&app), req)
        })
        .on(Method::GET, r"\.(js|css|png|eof|svg|ttf|woff)$", sphere::assets)
        .on(Method::GET, r"^/$", {
            let app = Arc::clone(&app);
            move |req| sphere::home(Arc::clone(&app), req)
        });

    Server::bind(LISTEN_ADDR).serve(router).await
}
