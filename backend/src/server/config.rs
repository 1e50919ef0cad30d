//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) workers: Option<usize>,
}

impl ServerConfig {
    /// Construct a server configuration listening on the given address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            workers: None,
        }
    }

    /// Pin the worker count instead of using one per logical CPU.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_carries_the_bind_address_and_workers() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().expect("socket address");
        let config = ServerConfig::new(addr).with_workers(2);
        assert_eq!(config.bind_addr(), addr);
        assert_eq!(config.workers, Some(2));
    }
}
