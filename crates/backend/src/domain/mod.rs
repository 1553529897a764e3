pub mod a001_department;
pub mod a002_program;
pub mod a003_cycle;
pub mod a004_objective;
pub mod a005_project;
pub mod a006_goal;
pub mod a007_goal_cycle_config;
pub mod a008_progress_entry;
pub mod a009_activity;
pub mod a010_risk;
