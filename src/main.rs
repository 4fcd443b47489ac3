mod config;
mod content;
mod routes;
mod site;
mod state;

use std::sync::Arc;

use content::loader::FsCaseStudyLoader;

#[tokio::main]
async fn main() {
    // .env is optional.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::SiteConfig::from_env().expect("invalid configuration");
    let port = config.port;

    let loader = FsCaseStudyLoader::new(config.content_dir.clone());
    tracing::info!(
        content_dir = %loader.dir().display(),
        assets_dir = %config.assets_dir.display(),
        "content source configured"
    );

    let state = state::AppState::new(Arc::new(loader), config);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "site listening");
    axum::serve(listener, app).await.expect("server failed");
}
