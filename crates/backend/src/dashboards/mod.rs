pub mod cycle_data;
pub mod d400_goal_tracking;
pub mod d401_goal_compliance;
pub mod d402_rollup;
pub mod d403_progress_entries;
pub mod d404_risk_summary;
