//! HTTP inbound adapter exposing the member REST endpoints.

pub mod envelope;
pub mod error;
pub mod health;
pub mod members;
pub mod schemas;
pub mod state;

use actix_web::web;

pub use error::ApiResult;

/// Path prefix under which the member endpoints are mounted a second time.
pub const API_PREFIX: &str = "/api";

/// Mount the member endpoints at the root and under [`API_PREFIX`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use signup::inbound::http::{self, state::HttpState};
/// use signup::outbound::memory::InMemoryMemberRegistry;
///
/// let state = HttpState::new(Arc::new(InMemoryMemberRegistry::new()));
/// let app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(http::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(API_PREFIX).configure(members::configure))
        .configure(members::configure);
}
