use serde::Deserialize;

use crate::models::AppointmentFields;
use crate::services::AppointmentError;

/// Body of `POST /api/citas` and `PUT /api/citas/{id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPayload {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub modelo_moto: Option<String>,
    #[serde(default)]
    pub servicio: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
}

impl AppointmentPayload {
    /// Presence check only: each field must be a non-empty string.
    pub fn validate(self) -> Result<AppointmentFields, AppointmentError> {
        Ok(AppointmentFields {
            nombre: required(self.nombre)?,
            modelo_moto: required(self.modelo_moto)?,
            servicio: required(self.servicio)?,
            fecha: required(self.fecha)?,
        })
    }
}

fn required(value: Option<String>) -> Result<String, AppointmentError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppointmentError::Validation),
    }
}
