use std::{env, net::SocketAddr, path::PathBuf};

use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// JSON menu to load instead of the built-in one
    pub menu_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            menu_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Self {
            host: env::var("STOREFRONT_HOST").unwrap_or(defaults.host),
            port: match env::var("STOREFRONT_PORT") {
                Ok(raw) => raw.parse().unwrap_or_else(|e| {
                    warn!("Invalid STOREFRONT_PORT {raw:?}: {e}, using {}", defaults.port);
                    defaults.port
                }),
                Err(_) => {
                    info!("STOREFRONT_PORT not set, using default: {}", defaults.port);
                    defaults.port
                }
            },
            menu_path: env::var("STOREFRONT_MENU_PATH").ok().map(PathBuf::from),
        }
    }

    pub fn addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
