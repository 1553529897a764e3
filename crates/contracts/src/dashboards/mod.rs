pub mod common;
pub mod d400_goal_tracking;
pub mod d401_goal_compliance;
pub mod d402_rollup;
pub mod d403_progress_entries;
pub mod d404_risk_summary;

#[cfg(test)]
mod tests {
    use super::d400_goal_tracking::GoalTrackingResponse;
    use super::d401_goal_compliance::{GoalComplianceResponse, OverallStatus};
    use super::d402_rollup::RollUpResponse;
    use super::d403_progress_entries::ProgressReportResponse;
    use super::d404_risk_summary::RiskReportResponse;
    use crate::enums::compliance_signal::{ComplianceSignal, EmptyChildrenPolicy};

    #[test]
    fn test_empty_responses_carry_no_data() {
        let tracking = GoalTrackingResponse::empty();
        assert!(!tracking.has_data);
        assert!(tracking.cycle.is_none());
        assert!(tracking.months.is_empty() && tracking.rows.is_empty());

        let compliance = GoalComplianceResponse::empty(ComplianceSignal::Activity);
        assert!(!compliance.has_data);
        assert_eq!(compliance.signal, ComplianceSignal::Activity);
        assert!(compliance.rows.is_empty());
        assert_eq!(compliance.stats.total, 0);
        assert_eq!(compliance.summary.overall, OverallStatus::SinMetas);

        let rollup = RollUpResponse::empty(ComplianceSignal::Numeric, EmptyChildrenPolicy::CountAsLagging);
        assert!(!rollup.has_data);
        assert_eq!(rollup.empty_children, EmptyChildrenPolicy::CountAsLagging);
        assert!(rollup.program_name.is_none() && rollup.objectives.is_empty());
        assert_eq!(rollup.goal_totals.total, 0);
        assert!(rollup.chart.project_names.is_empty());

        let entries = ProgressReportResponse::empty();
        assert!(!entries.has_data && entries.rows.is_empty());

        let risks = RiskReportResponse::empty();
        assert!(!risks.has_data && risks.rows.is_empty());
        assert_eq!(risks.total_risks, 0);
        assert_eq!(risks.level_counts.len(), 4);
        assert!(risks.level_counts.iter().all(|c| c.count == 0));
    }

    #[test]
    fn test_empty_response_serializes_has_data_false() {
        let json = serde_json::to_value(GoalTrackingResponse::empty()).unwrap();
        assert_eq!(json["has_data"], serde_json::Value::Bool(false));
        assert_eq!(json["rows"], serde_json::json!([]));
    }
}
