use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::repository::{ApiConfig, HttpRepository};
use crate::routes::api::api_v1_games;
use crate::routes::game::show_game;
use crate::routes::main::show_index;

pub mod domain;
pub mod dto;
pub mod encoder;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod refiner;
pub mod repository;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Shared HTTP client for the catalog, video search and translation APIs.
    let repo = HttpRepository::new(ApiConfig::from(&server_config))
        .map_err(|e| std::io::Error::other(format!("Failed to build HTTP client: {e}")))?;

    if server_config.rawg_api_key.trim().is_empty() {
        log::warn!("rawg_api_key is empty, catalog requests will be rejected");
    }

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .wrap(Cors::permissive())
                    .service(api_v1_games),
            )
            .service(show_index)
            .service(show_game)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
