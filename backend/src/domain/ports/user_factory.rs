//! Driving port for building users from descriptors.
//!
//! Inbound adapters receive an implementation of this port through shared
//! state instead of calling a concrete factory, so handlers stay testable in
//! isolation. The interface is synchronous: user construction is CPU-only and
//! must not perform I/O.

use crate::domain::{User, UserDescriptor};

/// Domain use-case port for user construction.
#[cfg_attr(test, mockall::automock)]
pub trait UserFactory: Send + Sync {
    /// Build a user from the supplied descriptor. Never fails.
    fn create_user(&self, descriptor: UserDescriptor) -> User;
}
