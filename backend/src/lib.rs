//! Member sign-up service library.
//!
//! A small actix-web service that validates sign-up requests and stores
//! members in a bounded in-memory registry.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
