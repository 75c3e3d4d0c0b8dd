use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::models::{AppState, Appointment, AppointmentPayload, DeletedAppointmentResponse};
use crate::services::AppointmentError;

pub async fn list_citas_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Appointment>> {
    Json(state.store.list().await)
}

pub async fn get_cita_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Appointment>, AppointmentError> {
    let cita = state.store.get(&id).await?;
    Ok(Json(cita))
}

pub async fn create_cita_handler(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<AppointmentPayload>>,
) -> Result<impl IntoResponse, AppointmentError> {
    let fields = body_or_empty(payload).validate()?;

    let cita = state.store.create(fields).await;
    Ok((StatusCode::CREATED, Json(cita)))
}

pub async fn update_cita_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Option<Json<AppointmentPayload>>,
) -> Result<Json<Appointment>, AppointmentError> {
    let payload = body_or_empty(payload);
    let cita = state.store.update(&id, || payload.validate()).await?;
    Ok(Json(cita))
}

pub async fn delete_cita_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeletedAppointmentResponse>, AppointmentError> {
    let cita = state.store.delete(&id).await?;
    Ok(Json(DeletedAppointmentResponse {
        message: "Cita eliminada correctamente".to_string(),
        cita,
    }))
}

// A request without a JSON content type is treated as an empty object.
fn body_or_empty(payload: Option<Json<AppointmentPayload>>) -> AppointmentPayload {
    payload.map(|Json(p)| p).unwrap_or_default()
}
