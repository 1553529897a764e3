pub mod aggregate;

pub use aggregate::Goal;
