use axum::Json;

use crate::models::SERVICIOS_SUGERIDOS;

pub async fn list_servicios_handler() -> Json<Vec<&'static str>> {
    Json(SERVICIOS_SUGERIDOS.to_vec())
}
