pub mod aggregate;

pub use aggregate::{GoalCycleConfig, GoalCycleConfigInput};
