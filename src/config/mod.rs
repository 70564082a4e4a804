//! Configuration loading and management for the Shift Pay Engine.
//!
//! This module loads the engine settings (currency, base rate, shift limit,
//! time zone) and the special-day calendar from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shift_pay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded configuration: {}", config.engine().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarConfig, DEFAULT_MAX_SHIFT_HOURS, EngineConfig, EngineMetadata};
