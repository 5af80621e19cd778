//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and writes to caller-provided sinks.

pub mod error;
pub mod output;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use output::{render, OutputFormat, OutputOptions};
