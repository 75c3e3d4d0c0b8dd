pub mod appointment;
pub mod service_catalog;

pub use appointment::{Appointment, AppointmentFields, DeletedAppointmentResponse, ErrorResponse};
pub use service_catalog::SERVICIOS_SUGERIDOS;
