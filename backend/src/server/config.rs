//! HTTP server configuration object and helpers.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use employees::domain::ports::EmployeeRepository;

/// Loopback listener used in every deployment.
pub const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(Ipv4Addr::LOCALHOST),
    8000,
);

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) repository: Arc<dyn EmployeeRepository>,
}

impl ServerConfig {
    /// Construct a server configuration bound to [`DEFAULT_BIND_ADDR`].
    #[must_use]
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            repository,
        }
    }

    /// Override the listening address.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Listener is fixed outside tests")
    )]
    #[must_use]
    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
