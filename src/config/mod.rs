//! Configuration module for gator
//!
//! Reads config from `~/.gatorconfig.json`.
//! Creates the file with default values on first access.
//! Every read goes back to disk; every write replaces the whole file.
//!
//! # Example
//!
//! ```no_run
//! use gator::config::ConfigStore;
//!
//! let store = ConfigStore::from_home().expect("Failed to locate config");
//! store.set_user("alice").expect("Failed to update config");
//! let config = store.read_config().expect("Failed to load config");
//! println!("Current user: {}", config.current_user_name);
//! ```

pub mod schema;
pub mod store;

pub use schema::Config;
pub use store::{default_config_path, ConfigStore, CONFIG_FILE_NAME};
