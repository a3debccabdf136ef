//! Data module - CSV loading and sensor records

mod loader;
mod record;

pub use loader::load;
pub use record::{format_tempo, Record, SensorTable};

#[cfg(test)]
pub use record::parse_tempo;
