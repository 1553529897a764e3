use contracts::domain::a003_cycle::Cycle;
use contracts::domain::a009_activity::Activity;
use contracts::enums::compliance_state::ComplianceState;
use contracts::shared::compliance::ActivityCompliance;
use rust_decimal::Decimal;

use super::percent;

/// Activities without cycle predate cycles and count everywhere
pub fn activity_in_cycle(activity: &Activity, cycle: &Cycle) -> bool {
    match activity.cycle_id.as_deref() {
        Some(cycle_id) => cycle_id == cycle.id,
        None => true,
    }
}

/// Compliance of a goal judged only by the state of its activities.
///
/// Cumplida needs at least one activity and all of them completed. No
/// activities, or none completed, is Rezagada.
pub fn compute_activity_compliance<'a, I>(activities: I) -> ActivityCompliance
where
    I: IntoIterator<Item = &'a Activity>,
{
    let mut total: u32 = 0;
    let mut completed: u32 = 0;
    for activity in activities {
        total += 1;
        if activity.state.is_completed() {
            completed += 1;
        }
    }

    let state = if total == 0 || completed == 0 {
        ComplianceState::Rezagada
    } else if completed == total {
        ComplianceState::Cumplida
    } else {
        ComplianceState::EnProgreso
    };

    let percentage = percent::quantize(percent::ratio_percent(
        Decimal::from(completed),
        Decimal::from(total),
    ));
    let remaining = (Decimal::ONE_HUNDRED - percentage).max(Decimal::ZERO);

    ActivityCompliance {
        state,
        completed,
        total,
        not_completed: total - completed,
        percentage,
        remaining,
    }
}

/// Activities of one goal inside the cycle
pub fn activities_for_goal<'a>(
    goal_id: &'a str,
    cycle: Option<&'a Cycle>,
    activities: &'a [Activity],
) -> impl Iterator<Item = &'a Activity> + 'a {
    activities.iter().filter(move |a| {
        a.goal_id.as_deref() == Some(goal_id) && cycle.map_or(true, |c| activity_in_cycle(a, c))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::compliance::goal_progress::fixtures::{cycle, date};
    use contracts::enums::activity_state::ActivityState;
    use rust_decimal_macros::dec;

    fn activity(goal_id: &str, cycle_id: Option<&str>, state: ActivityState) -> Activity {
        Activity {
            id: format!("a-{goal_id}-{state}"),
            goal_id: Some(goal_id.to_string()),
            cycle_id: cycle_id.map(str::to_string),
            department_id: None,
            name: None,
            description: "Taller".into(),
            start_date: date(2025, 1, 1),
            end_date: date(2025, 2, 1),
            state,
            responsible: None,
        }
    }

    #[test]
    fn test_no_activities_is_rezagada() {
        let result = compute_activity_compliance(std::iter::empty::<&Activity>());
        assert_eq!(result.state, ComplianceState::Rezagada);
        assert_eq!(result.total, 0);
        assert_eq!(result.percentage, Decimal::ZERO);
        assert_eq!(result.remaining, dec!(100));
    }

    #[test]
    fn test_all_completed_is_cumplida() {
        let acts = vec![
            activity("g1", None, ActivityState::Cumplida),
            activity("g1", None, ActivityState::Cumplida),
        ];
        let result = compute_activity_compliance(&acts);
        assert_eq!(result.state, ComplianceState::Cumplida);
        assert_eq!(result.percentage, dec!(100));
        assert_eq!(result.remaining, Decimal::ZERO);
    }

    #[test]
    fn test_partial_completion() {
        let acts = vec![
            activity("g1", None, ActivityState::Cumplida),
            activity("g1", None, ActivityState::EnProceso),
            activity("g1", None, ActivityState::NoCumplida),
        ];
        let result = compute_activity_compliance(&acts);
        assert_eq!(result.state, ComplianceState::EnProgreso);
        assert_eq!(result.completed, 1);
        assert_eq!(result.not_completed, 2);
        assert_eq!(result.percentage, dec!(33.33));
        assert_eq!(result.remaining, dec!(66.67));
    }

    #[test]
    fn test_none_completed_is_rezagada() {
        let acts = vec![activity("g1", None, ActivityState::Activa)];
        assert_eq!(compute_activity_compliance(&acts).state, ComplianceState::Rezagada);
    }

    #[test]
    fn test_activities_for_goal_respects_cycle() {
        let c = cycle("c1", date(2025, 1, 1), date(2025, 12, 31));
        let acts = vec![
            activity("g1", Some("c1"), ActivityState::Cumplida),
            activity("g1", Some("c0"), ActivityState::Cumplida),
            activity("g1", None, ActivityState::Activa),
            activity("g2", Some("c1"), ActivityState::Cumplida),
        ];
        assert_eq!(activities_for_goal("g1", Some(&c), &acts).count(), 2);
        assert_eq!(activities_for_goal("g1", None, &acts).count(), 3);
    }
}
