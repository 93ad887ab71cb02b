//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use super::Environment;
use crate::domain::ports::BootcampRepository;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) environment: Environment,
    pub(crate) repository: Arc<dyn BootcampRepository>,
}

impl ServerConfig {
    /// Construct a development-mode configuration.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, repository: Arc<dyn BootcampRepository>) -> Self {
        Self {
            bind_addr,
            environment: Environment::default(),
            repository,
        }
    }

    /// Select the deployment mode.
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the deployment mode.
    #[must_use]
    pub fn environment(&self) -> Environment {
        self.environment
    }
}
