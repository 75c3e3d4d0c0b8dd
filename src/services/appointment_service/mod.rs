pub mod error;
pub mod store;

pub use error::AppointmentError;
pub use store::AppointmentStore;
