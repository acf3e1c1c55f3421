//! API server configuration.

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8000").
    pub bind_addr: String,
}

impl ApiConfig {
    /// Builds the listener address from a host and port.
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            bind_addr: format!("{host}:{port}"),
        }
    }
}
