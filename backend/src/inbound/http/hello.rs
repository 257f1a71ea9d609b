//! Greeting endpoint.
//!
//! ```text
//! GET  /   -> {"message":"Hello World"}
//! POST /   -> {"message":"Hello World"}
//! ```
//!
//! The handler ignores the request entirely. On every call it asks the
//! injected [`UserFactory`](crate::domain::ports::UserFactory) to build the
//! sample user below, inspects it, and answers with a fixed message.

use actix_web::{route, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{TechEntry, UserDescriptor};
use crate::inbound::http::state::HttpState;

/// Message returned by the greeting endpoint.
pub const GREETING: &str = "Hello World";

/// Response body for the greeting endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GreetingResponse {
    /// Always [`GREETING`].
    #[schema(example = "Hello World")]
    pub message: String,
}

impl Default for GreetingResponse {
    fn default() -> Self {
        Self {
            message: GREETING.to_owned(),
        }
    }
}

/// Descriptor the greeting handler submits to the user factory.
pub fn sample_descriptor() -> UserDescriptor {
    UserDescriptor::new("cintiafumi@gmail.com", "123456").with_techs([
        TechEntry::name("Node.js"),
        TechEntry::name("ReactJS"),
        TechEntry::name("React Native"),
        TechEntry::rated("Javascript", 100),
    ])
}

/// Build the sample user and return the static greeting.
#[utoipa::path(
    method(get, post),
    path = "/",
    responses(
        (status = 200, description = "Static greeting", body = GreetingResponse)
    ),
    tags = ["greeting"],
    operation_id = "helloWorld"
)]
#[route("/", method = "GET", method = "POST")]
pub async fn hello_world(state: web::Data<HttpState>) -> web::Json<GreetingResponse> {
    let user = state.users.create_user(sample_descriptor());
    debug!(
        tech_count = user.techs().len(),
        password_set = !user.password().is_empty(),
        "sample user built"
    );
    web::Json(GreetingResponse::default())
}

#[cfg(test)]
mod tests;
