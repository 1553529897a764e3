pub mod aggregate;

pub use aggregate::Activity;
