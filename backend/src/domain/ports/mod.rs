//! Domain ports for the hexagonal boundary.

mod user_factory;

#[cfg(test)]
pub use user_factory::MockUserFactory;
pub use user_factory::UserFactory;
