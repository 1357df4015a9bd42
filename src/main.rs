use std::fmt::Display;

use formwizard::{config, routes, state};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().unwrap_or_else(|e| fatal("invalid configuration", &e));
    let state = state::AppState::load(&config.templates_dir).unwrap_or_else(|e| fatal("template load failed", &e));

    let app = routes::app(state);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| fatal("failed to bind", &e));

    tracing::info!(%addr, "formwizard listening");
    if let Err(e) = axum::serve(listener, app).await {
        fatal("server failed", &e);
    }
}

/// Log through the subscriber and abort startup.
fn fatal(context: &str, err: &dyn Display) -> ! {
    tracing::error!(error = %err, "{context}");
    std::process::exit(1)
}
