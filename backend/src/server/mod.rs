//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use tracing::info;

#[cfg(debug_assertions)]
use signup::ApiDoc;
use signup::Trace;
use signup::domain::ports::MemberRegistry;
use signup::inbound::http;
use signup::inbound::http::health::{HealthState, live, ready};
use signup::inbound::http::state::HttpState;
use signup::outbound::memory::InMemoryMemberRegistry;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(http::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the HTTP server around a fresh member registry.
///
/// The registry is created once here and shared by every worker.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        member_limit,
    } = config;
    #[cfg(feature = "metrics")]
    let prometheus = make_metrics()?;

    let registry: Arc<dyn MemberRegistry> =
        Arc::new(InMemoryMemberRegistry::with_capacity(member_limit));
    let capacity = registry.capacity();
    let http_state = web::Data::new(HttpState::new(registry));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, member_limit = capacity, "member sign-up server listening");
    health_state.mark_ready();
    Ok(server)
}

/// Prometheus middleware serving `/metrics`.
#[cfg(feature = "metrics")]
fn make_metrics() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("signup")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::other(format!("failed to configure Prometheus metrics: {e}")))
}
