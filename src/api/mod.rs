// src/api/mod.rs

pub mod handler;

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::models::AppState;
pub use handler::{
    create_cita_handler, delete_cita_handler, get_cita_handler, list_citas_handler,
    list_servicios_handler, update_cita_handler,
};

/// Builds the `/api` router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/citas", get(list_citas_handler).post(create_cita_handler))
        .route(
            "/citas/{id}",
            get(get_cita_handler)
                .put(update_cita_handler)
                .delete(delete_cita_handler),
        )
        .route("/servicios", get(list_servicios_handler));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
