//! Domain primitives and services.
//!
//! Purpose: Define the user factory use-case and the value types it works
//! with. Types here stay free of HTTP concerns; inbound adapters depend on
//! the ports in [`ports`] rather than on concrete services.
//!
//! Public surface:
//! - `UserDescriptor`, `Password`, `TechEntry`: factory input.
//! - `User`: factory output.
//! - `UserFactoryService`: pure implementation of `ports::UserFactory`.
//! - `Error`, `ErrorCode`: transport-agnostic error payload.
//! - `TraceId`: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod tech;
pub mod trace_id;
pub mod user;
pub mod user_factory;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::tech::{RatedTech, TechEntry};
pub use self::trace_id::TraceId;
pub use self::user::{Password, User, UserDescriptor};
pub use self::user_factory::UserFactoryService;
