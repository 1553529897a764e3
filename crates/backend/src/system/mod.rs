pub mod middleware;
pub mod settings;
pub mod tracing;
