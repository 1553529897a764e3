//! Goal progress and compliance engine.
//!
//! Pure functions over already loaded rows. Services load the data, call in
//! here, and shape the result for the dashboards.

pub mod activity_compliance;
pub mod goal_progress;
pub mod monthly_series;
pub mod percent;
pub mod rollup;
pub mod scope;

pub use activity_compliance::{activities_for_goal, compute_activity_compliance};
pub use goal_progress::{compute_for_cycle, compute_goal_progress, entry_in_cycle};
pub use monthly_series::{build_monthly_series, monthly_value_for_goal};
pub use rollup::{roll_up, roll_up_objective, roll_up_project, GoalEvaluation};
pub use scope::{can_register_progress, scoped_goals, Actor, GoalScope};
