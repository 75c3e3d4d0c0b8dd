use serde::{Deserialize, Serialize};

/// A booking at the shop. Serialized with the camelCase keys the UI reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub nombre: String,
    pub modelo_moto: String,
    pub servicio: String,
    pub fecha: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// The four client-supplied fields, already checked to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentFields {
    pub nombre: String,
    pub modelo_moto: String,
    pub servicio: String,
    pub fecha: String,
}

impl Appointment {
    pub fn new(id: String, fields: AppointmentFields, created_at: String) -> Self {
        Appointment {
            id,
            nombre: fields.nombre,
            modelo_moto: fields.modelo_moto,
            servicio: fields.servicio,
            fecha: fields.fecha,
            created_at,
            updated_at: None,
        }
    }

    /// Overwrites the business fields; `id` and `created_at` are left alone.
    pub fn apply(&mut self, fields: AppointmentFields, updated_at: String) {
        self.nombre = fields.nombre;
        self.modelo_moto = fields.modelo_moto;
        self.servicio = fields.servicio;
        self.fecha = fields.fecha;
        self.updated_at = Some(updated_at);
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedAppointmentResponse {
    pub message: String,
    pub cita: Appointment,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> AppointmentFields {
        AppointmentFields {
            nombre: "Juan Reyes".to_string(),
            modelo_moto: "Honda CBR 600".to_string(),
            servicio: "Cambio de aceite".to_string(),
            fecha: "2024-06-01T10:00".to_string(),
        }
    }

    #[test]
    fn serializes_with_camel_case_keys_and_no_updated_at() {
        let cita = Appointment::new("1".to_string(), fields(), "2024-05-01T08:00:00.000Z".to_string());
        let json = serde_json::to_value(&cita).unwrap();

        assert_eq!(json["modeloMoto"], "Honda CBR 600");
        assert_eq!(json["createdAt"], "2024-05-01T08:00:00.000Z");
        assert!(json.get("updatedAt").is_none());
        assert!(json.get("modelo_moto").is_none());
    }

    #[test]
    fn apply_keeps_identity_and_sets_updated_at() {
        let mut cita = Appointment::new("abc".to_string(), fields(), "t0".to_string());
        cita.apply(
            AppointmentFields {
                nombre: "Ana".to_string(),
                modelo_moto: "Yamaha MT-07".to_string(),
                servicio: "Afinación".to_string(),
                fecha: "2024-07-01T09:30".to_string(),
            },
            "t1".to_string(),
        );

        assert_eq!(cita.id, "abc");
        assert_eq!(cita.created_at, "t0");
        assert_eq!(cita.nombre, "Ana");
        assert_eq!(cita.updated_at.as_deref(), Some("t1"));
    }
}
