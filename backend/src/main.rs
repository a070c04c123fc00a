use tokio::net::TcpListener;
use tracing::info;

mod config;
mod error;
mod logging;
mod routes;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), error::Error> {
    dotenvy::from_path(".env").ok();
    logging::setup();

    let config = ServerConfig::from_env()?;
    if !config.dist_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {}; build the frontend with `trunk build` first",
            config.dist_dir.display()
        );
    }

    let app = routes::router(&config.dist_dir);
    let addr = config.socket_addr();
    info!("serving {} on http://{}", config.dist_dir.display(), addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
