pub mod aggregate;

pub use aggregate::{Mitigation, Risk};
