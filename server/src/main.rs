//! Character Finder host binary: Leptos SSR shell plus static assets.
//!
//! All application behavior lives in the `client` crate; this binary only
//! renders the shell and serves the compiled WASM/CSS bundle. The character
//! lookup API is a public third-party service called from the browser, so
//! there are no first-party data routes here.

#![recursion_limit = "256"]

mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let app = routes::app().expect("router assembly failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "charfinder listening");
    axum::serve(listener, app).await.expect("server failed");
}
