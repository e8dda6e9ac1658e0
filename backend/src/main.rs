mod config;
mod services;

use crate::config::AppConfig;
use crate::services::render::orchestrator::RenderOrchestrator;
use crate::services::templates::store::TemplateStore;
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let store = TemplateStore::open(&config.database_path).map_err(|e| {
        error!("Cannot open {}: {}", config.database_path.display(), e);
        io::Error::other(e.to_string())
    })?;
    let store = web::Data::new(store);
    let orchestrator = web::Data::new(RenderOrchestrator::new(&config.render));

    let url = config.url();
    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open a browser: {}", e);
            }
        });
    }

    let static_dir = config.static_dir.clone();
    if !static_dir.is_dir() {
        warn!(
            "Static directory {} not found; only the API will be served",
            static_dir.display()
        );
    }
    let json_limit = config.json_limit;

    info!("Template studio running at {}", url);

    HttpServer::new(move || {
        let app = App::new()
            .wrap(Cors::permissive())
            .configure(services::configure(store.clone(), orchestrator.clone(), json_limit));
        if static_dir.is_dir() {
            app.service(Files::new("/", &static_dir).index_file("index.html"))
        } else {
            app
        }
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
