use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("Cita no encontrada")]
    NotFound,
    #[error("Todos los campos son requeridos")]
    Validation,
}

impl AppointmentError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppointmentError::NotFound => StatusCode::NOT_FOUND,
            AppointmentError::Validation => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppointmentError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
