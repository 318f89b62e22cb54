use crate::api::ApiClient;
use crate::config::Config;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod auth;
mod config;
mod domain;
mod errors;
mod filters;
mod forms;
mod geos;
mod handlers;
mod paths;
mod responses;
mod router;
mod state;
mod templates;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let api = match ApiClient::new(&config.api_base_url, config.request_timeout) {
        Ok(api) => api,
        Err(e) => {
            error!("Could not build the API client: {e}");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    let server = Server::bind(&addr).max_workers(config.max_workers);
    let state = AppState::new(Box::new(api), config);

    info!("Starting server at http://{addr}");

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
