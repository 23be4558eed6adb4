use crate::config::Config;
use crate::router::{handle, App};
use astra::{ConnectionInfo, Request, Server};

mod catalog;
mod config;
mod domain;
mod errors;
mod geos;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Read configuration from the environment
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the catalog source. Loading happens per request, so a missing
    // file here is not fatal; the pages render an unavailable state instead.
    let source = match config.catalog_source() {
        Ok(source) => source,
        Err(e) => {
            log::error!("❌ Could not set up catalog source: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Serving listings from {}", source.describe());

    let app = App::new(source);

    // 3️⃣ Start the server
    log::info!("Starting server at http://{}", config.addr);
    let server = Server::bind(&config.addr).max_workers(config.workers);

    let result = server.serve(move |req: Request, _info: ConnectionInfo| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => templates::html_error_response(err),
        };

        log::info!("{method} {path} -> {}", resp.status().as_u16());
        resp
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
