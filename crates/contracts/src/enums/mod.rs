pub mod activity_state;
pub mod compliance_signal;
pub mod compliance_state;
pub mod risk_level;
pub mod user_role;
