pub mod log_utils;

pub use log_utils::{init_tracing, timestamp_now};
