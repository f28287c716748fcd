pub mod config;
pub mod error;

pub use config::{Config, ConfigStore};
pub use error::{GatorError, Result};
