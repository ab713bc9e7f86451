mod defaults;
mod io;
mod schema;
mod validate;

pub use io::load_config;
pub use schema::{Config, ThresholdConfig};
pub use validate::ConfigError;

#[cfg(test)]
mod tests;
