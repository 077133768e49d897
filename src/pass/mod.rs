//! Password generation core.

pub mod charset;
mod config;
mod generate;

pub use config::{Config, ConfigError, DEFAULT_GUESSES_PER_SECOND};
pub use generate::generate;
