use actix_web::{web, App, HttpServer};
use clap::Parser;
use log::{error, info};
use player_registry::config::ServerConfig;
use player_registry::handlers;
use player_registry::registry::PlayerRegistry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::parse();

    // Shared across every worker for the lifetime of the process
    let registry = web::Data::new(PlayerRegistry::new());

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(registry.clone())
            .configure(handlers::configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server.bind(config.bind_address()).map_err(|e| {
        error!("Failed to bind {}:{}: {}", config.host, config.port, e);
        e
    })?;

    info!("🌐 Server is running on http://{}:{}", config.host, config.port);

    server.run().await
}
