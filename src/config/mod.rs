//! Configuration for the Salary Tracker.
//!
//! Pay rates are plain process-wide configuration values, loaded from a
//! YAML file or taken from the documented defaults.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::PayRates;
