//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod hello;
pub mod state;

pub use error::{ApiResult, not_found};
