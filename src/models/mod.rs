// src/models/mod.rs

pub mod api;
pub mod app;
pub mod appointments;

pub use api::AppointmentPayload;
pub use app::AppState;
pub use appointments::{
    Appointment, AppointmentFields, DeletedAppointmentResponse, ErrorResponse, SERVICIOS_SUGERIDOS,
};
