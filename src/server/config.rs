//! Server configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Configuration values controlling where the HTTP server listens.
///
/// Values are layered from defaults, configuration files, environment
/// variables prefixed with `ROSTER_`, and command-line arguments.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct ServerSettings {
    /// TCP port the server binds to.
    #[ortho_config(default = 4040)]
    pub port: u16,
    /// Optional bind host override.
    pub host: Option<String>,
}

impl ServerSettings {
    /// Return the configured host, falling back to the default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Address tuple suitable for `HttpServer::bind`.
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host().to_owned(), self.port)
    }
}
