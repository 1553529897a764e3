pub mod aggregate;

pub use aggregate::Objective;
