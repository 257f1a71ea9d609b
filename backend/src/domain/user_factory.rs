//! Domain service turning user descriptors into user values.
//!
//! The service owns no collaborators: construction is a pure mapping of the
//! descriptor fields, so repeated calls with equal input yield equal users.

use crate::domain::ports::UserFactory;
use crate::domain::{User, UserDescriptor};

/// Stateless user factory.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserFactoryService;

impl UserFactoryService {
    /// Build a user from the descriptor, carrying every field through as-is.
    #[must_use]
    pub fn create_user(&self, descriptor: UserDescriptor) -> User {
        User::from(descriptor)
    }
}

impl UserFactory for UserFactoryService {
    fn create_user(&self, descriptor: UserDescriptor) -> User {
        UserFactoryService::create_user(self, descriptor)
    }
}
