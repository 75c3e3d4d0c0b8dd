pub mod citas;
pub mod servicios;

pub use citas::{
    create_cita_handler, delete_cita_handler, get_cita_handler, list_citas_handler,
    update_cita_handler,
};
pub use servicios::list_servicios_handler;
