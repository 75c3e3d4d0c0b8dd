use crate::services::AppointmentStore;

#[derive(Default)]
pub struct AppState {
    pub store: AppointmentStore,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            store: AppointmentStore::new(),
        }
    }
}
