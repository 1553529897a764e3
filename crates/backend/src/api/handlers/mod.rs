pub mod a007_goal_cycle_config;
pub mod a008_progress_entry;
pub mod d400_goal_tracking;
pub mod d401_goal_compliance;
pub mod d402_rollup;
pub mod d403_progress_entries;
pub mod d404_risk_summary;
pub mod sys_settings;
