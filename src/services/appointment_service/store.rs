use tokio::sync::Mutex;
use uuid::Uuid;

use super::AppointmentError;
use crate::models::{Appointment, AppointmentFields};
use crate::utils::timestamp_now;

/// In-memory appointment list, kept in insertion order.
///
/// Every operation takes the lock once, so a create/update/delete is never
/// observed half done by a concurrent request. Nothing is persisted.
#[derive(Debug, Default)]
pub struct AppointmentStore {
    citas: Mutex<Vec<Appointment>>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Appointment> {
        self.citas.lock().await.clone()
    }

    pub async fn get(&self, id: &str) -> Result<Appointment, AppointmentError> {
        let citas = self.citas.lock().await;
        citas
            .iter()
            .find(|cita| cita.id == id)
            .cloned()
            .ok_or(AppointmentError::NotFound)
    }

    pub async fn create(&self, fields: AppointmentFields) -> Appointment {
        // v7 ids are time ordered and monotonic within the process.
        let cita = Appointment::new(Uuid::now_v7().to_string(), fields, timestamp_now());

        let mut citas = self.citas.lock().await;
        citas.push(cita.clone());
        tracing::debug!(id = %cita.id, total = citas.len(), "appointment created");
        cita
    }

    /// Looks the id up first, then asks `fields` for the new values, all under
    /// one lock. An unknown id wins over invalid fields.
    pub async fn update<F>(&self, id: &str, fields: F) -> Result<Appointment, AppointmentError>
    where
        F: FnOnce() -> Result<AppointmentFields, AppointmentError>,
    {
        let mut citas = self.citas.lock().await;
        let cita = citas
            .iter_mut()
            .find(|cita| cita.id == id)
            .ok_or(AppointmentError::NotFound)?;

        cita.apply(fields()?, timestamp_now());
        tracing::debug!(id = %cita.id, "appointment updated");
        Ok(cita.clone())
    }

    pub async fn delete(&self, id: &str) -> Result<Appointment, AppointmentError> {
        let mut citas = self.citas.lock().await;
        let index = citas
            .iter()
            .position(|cita| cita.id == id)
            .ok_or(AppointmentError::NotFound)?;

        let removed = citas.remove(index);
        tracing::debug!(id = %removed.id, total = citas.len(), "appointment deleted");
        Ok(removed)
    }
}
