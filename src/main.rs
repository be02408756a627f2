mod config;
mod error;
mod handlers;
mod models;
mod routes;

use actix_web::{App, HttpServer};
use config::Config;
use dotenv::dotenv;
use tracing::Level;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env just means everything comes from the environment.
    dotenv().ok();
    let config = Config::from_env()?;

    let level = if config.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    tracing::info!(
        "Serving registration form on http://{}:{} (debug: {})",
        config.host,
        config.port,
        config.debug
    );

    HttpServer::new(|| App::new().configure(routes::init))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await?;

    Ok(())
}
