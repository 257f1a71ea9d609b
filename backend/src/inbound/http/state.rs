//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without wiring real services.

use std::sync::Arc;

use crate::domain::ports::UserFactory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Builds the user value the greeting handler constructs per request.
    pub users: Arc<dyn UserFactory>,
}

impl HttpState {
    /// Construct state from an injected user factory.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use hello_backend::domain::UserFactoryService;
    /// use hello_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(UserFactoryService));
    /// let _users = state.users.clone();
    /// ```
    pub fn new(users: Arc<dyn UserFactory>) -> Self {
        Self { users }
    }
}
