// marketplace_api/src/web/mod.rs

// Declare child modules
pub mod handlers;
pub mod middleware;
pub mod routes;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::from_fn, web as actix_data, App};

use crate::state::AppState;

pub use routes::configure_app_routes;

/// The complete application: shared state, routes, and every middleware
/// policy. `main` hands this to `HttpServer`; HTTP tests hand it to
/// `actix_web::test::init_service`.
pub fn build_app(
  app_state: AppState,
) -> App<
  impl ServiceFactory<
    ServiceRequest,
    Config = (),
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
    InitError = (),
  >,
> {
  App::new()
    .app_data(actix_data::Data::new(app_state)) // Share AppState with handlers
    .configure(configure_app_routes)
    .wrap(from_fn(middleware::enforce_rate_limit))
    .wrap(middleware::security_headers())
    .wrap(middleware::cors())
    .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
}
