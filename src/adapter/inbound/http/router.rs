//! Route table and middleware.

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::adapter::inbound::http::handler;
use crate::app::AppState;
use crate::port::CatalogStore;

/// Build the application router.
pub fn router<S>(state: AppState<S>) -> Router
where
    S: CatalogStore + 'static,
{
    let cors = cors_layer(&state.config().server.cors_origins);

    Router::new()
        .route("/", get(handler::index))
        .route("/health", get(handler::health_check))
        .route("/api/properties", get(handler::list_properties::<S>))
        .route("/api/properties/search", get(handler::search_properties::<S>))
        .route("/api/properties/{id}", get(handler::get_property::<S>))
        .route(
            "/api/properties/{id}/availability",
            get(handler::get_availability::<S>),
        )
        .route("/api/properties/{id}/quote", get(handler::get_quote::<S>))
        .route("/api/properties/{id}/tours", get(handler::get_tours::<S>))
        .route(
            "/api/properties/{id}/bookings",
            get(handler::list_bookings::<S>),
        )
        .route(
            "/api/properties/{id}/inquiries",
            get(handler::list_inquiries::<S>),
        )
        .route("/api/bookings", post(handler::create_booking::<S>))
        .route("/api/inquiries", post(handler::create_inquiry::<S>))
        .route("/api/stats", get(handler::get_stats::<S>))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
