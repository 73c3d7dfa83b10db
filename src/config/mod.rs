//! Configuration loading and management for the Net Pay Engine.
//!
//! The engine supports a single fixed deduction scheme. Its rates are
//! compiled in as [`DeductionRates::default`] and can also be loaded from a
//! `scheme.yaml` file, together with metadata such as the currency suffix.
//!
//! # Example
//!
//! ```no_run
//! use net_pay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hu_2025").unwrap();
//! println!("Loaded scheme: {}", config.scheme().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DeductionRates, SchemeConfig, SchemeFile, SchemeMetadata};
