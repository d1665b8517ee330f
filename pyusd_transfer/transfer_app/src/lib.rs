//! Orchestration for the PYUSD transfer harness: environment-driven
//! configuration, the fixed demo sequence the deploy scripts run against a
//! network, and the illustrative key-generation utility.

pub mod config;
pub mod errors;
pub mod keygen;
pub mod scenario;

pub use config::{AppConfig, load_config};
pub use errors::AppError;
