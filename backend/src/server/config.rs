//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use hello_backend::domain::UserFactoryService;
use hello_backend::domain::ports::UserFactory;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) users: Arc<dyn UserFactory>,
}

impl ServerConfig {
    /// Construct a configuration wired to the default user factory.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            users: Arc::new(UserFactoryService),
        }
    }

    /// Replace the user factory handed to HTTP handlers.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by server tests to inject doubles")
    )]
    #[must_use]
    pub fn with_user_factory(mut self, users: Arc<dyn UserFactory>) -> Self {
        self.users = users;
        self
    }
}
