//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the greeting and health endpoints together with the
//! response schemas they return. The generated document backs Swagger UI in
//! debug builds and is exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::hello::GreetingResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hello backend API",
        description = "Static greeting backed by an injected user factory, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::hello::hello_world,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(GreetingResponse, Error, ErrorCode)),
    tags(
        (name = "greeting", description = "Static greeting"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
