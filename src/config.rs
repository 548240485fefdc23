use clap::Parser;

/// Command line / environment configuration of the server process.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "In-memory player registry over HTTP", long_about = None)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    #[arg(short = 'H', long, env = "PLAYER_REGISTRY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PLAYER_REGISTRY_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Number of HTTP worker threads (one per CPU when unset)
    #[arg(short, long, env = "PLAYER_REGISTRY_WORKERS")]
    pub workers: Option<usize>,
}

impl ServerConfig {
    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
