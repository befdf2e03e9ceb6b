use actix_web::{middleware::Logger, web, App, HttpServer};
use std::io;
use std::path::PathBuf;

mod config;
mod static_files;

use config::Config;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Load configuration
    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    log::info!(
        "Starting {} at {}:{}",
        shared::footer::APP_TITLE,
        config.host,
        config.port
    );

    let static_root = PathBuf::from(&config.static_files_path);
    log::info!("Serving static files from: {}", static_root.display());
    if !static_root.join("index.html").is_file() {
        log::warn!("No index.html in {}; build the frontend first", static_root.display());
    }

    HttpServer::new(move || {
        let root = static_root.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| static_files::configure(cfg, &root))
            .default_service(web::route().to(static_files::index))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
