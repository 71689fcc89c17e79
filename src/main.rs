use crate::config::AppConfig;
use crate::db::connection::Database;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

mod cities;
mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let db = Database::new(config.database_path.clone());

    // The dataset is read-only and may show up after boot; a missing
    // file degrades to placeholder metrics instead of refusing to start.
    if let Err(e) = db.ping() {
        tracing::warn!(path = %config.database_path, error = %e, "data store not reachable at startup");
    }

    let addr: SocketAddr = match config.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(bind_addr = %config.bind_addr, error = %e, "invalid bind address");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "starting server");
    let server = Server::bind(&addr).max_workers(8);

    // Serve requests, passing the db handle into the closure.
    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }
}
