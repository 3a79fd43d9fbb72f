//! Logging/tracing setup for the apmed services.

mod tracing_init;

pub use tracing_init::init;
