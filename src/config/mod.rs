//! Configuration loading for the payroll server.
//!
//! This module loads the YAML configuration file that selects the listener
//! address, the persistence backend and the log output.
//!
//! # Example
//!
//! ```no_run
//! use shift_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Data directory: {}", config.storage().data_dir.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, LogFormat, LoggingConfig, ServerConfig, StorageBackend, StorageConfig};
