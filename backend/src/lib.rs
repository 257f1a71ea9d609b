//! Hello backend library modules.
//!
//! The crate follows a ports-and-adapters layout: [`domain`] holds the user
//! factory use-case, [`inbound`] translates HTTP requests into port calls and
//! [`middleware`] carries request-scoped concerns such as trace correlation.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
