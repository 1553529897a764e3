use contracts::domain::a003_cycle::Cycle;
use contracts::domain::a006_goal::Goal;
use contracts::domain::a007_goal_cycle_config::GoalCycleConfig;
use contracts::domain::a008_progress_entry::ProgressEntry;
use contracts::enums::compliance_state::ComplianceState;
use contracts::shared::compliance::GoalProgress;
use rust_decimal::Decimal;

use super::percent;

/// Entry counts for the cycle: matching `cycle_id`, or a legacy row without
/// cycle whose date falls inside the cycle window.
pub fn entry_in_cycle(entry: &ProgressEntry, cycle: &Cycle) -> bool {
    match entry.cycle_id.as_deref() {
        Some(cycle_id) => cycle_id == cycle.id,
        None => cycle.contains(entry.recorded_on),
    }
}

/// Accumulated value of a goal over the given entries.
///
/// Accumulable goals take the most recent entry (the last one wins on equal
/// dates); the rest sum every entry. Entries of other goals are ignored.
pub fn accumulate(goal: &Goal, entries: &[ProgressEntry]) -> Decimal {
    let own = entries.iter().filter(|e| e.goal_id == goal.id);
    if goal.accumulable {
        own.max_by_key(|e| e.recorded_on)
            .map(|e| e.value)
            .unwrap_or(Decimal::ZERO)
    } else {
        percent::saturating_sum(own.map(|e| e.value))
    }
}

pub fn classify(accumulated: Decimal, target: Option<Decimal>) -> ComplianceState {
    match target {
        Some(target) if target > Decimal::ZERO => {
            if accumulated >= target {
                ComplianceState::Cumplida
            } else if accumulated > Decimal::ZERO {
                ComplianceState::EnProgreso
            } else {
                ComplianceState::Rezagada
            }
        }
        _ => ComplianceState::SinMeta,
    }
}

/// Progress of one goal against one cycle configuration.
///
/// `entries` should already be restricted to the cycle; see [`entry_in_cycle`].
pub fn compute_goal_progress(
    goal: &Goal,
    config: Option<&GoalCycleConfig>,
    entries: &[ProgressEntry],
) -> GoalProgress {
    let accumulated = accumulate(goal, entries);
    let target = config.and_then(|c| c.target);
    let baseline = config.and_then(|c| c.baseline);
    let raw_percentage = match target {
        Some(t) => percent::ratio_percent(accumulated, t),
        None => Decimal::ZERO,
    };

    GoalProgress {
        accumulated,
        target,
        baseline,
        raw_percentage,
        percentage: percent::quantize(percent::clamp_percent(raw_percentage)),
        state: classify(accumulated, target),
        entry_count: entries.iter().filter(|e| e.goal_id == goal.id).count(),
    }
}

/// Cycle-scoped progress. None when the goal has no configuration for the
/// cycle, which removes it from every cycle aggregate.
pub fn compute_for_cycle(
    goal: &Goal,
    cycle: &Cycle,
    configs: &[GoalCycleConfig],
    entries: &[ProgressEntry],
) -> Option<GoalProgress> {
    let config = configs
        .iter()
        .find(|c| c.goal_id == goal.id && c.cycle_id == cycle.id)?;

    let in_cycle: Vec<ProgressEntry> = entries
        .iter()
        .filter(|e| e.goal_id == goal.id && entry_in_cycle(e, cycle))
        .cloned()
        .collect();

    Some(compute_goal_progress(goal, Some(config), &in_cycle))
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_incremental_percentage_goal_sums_entries() {
        let g = goal("g1", false, true);
        let cfg = config("g1", "c1", Some(dec!(0.80)));
        let entries = vec![
            entry("g1", Some("c1"), dec!(0.10), date(2025, 3, 3)),
            entry("g1", Some("c1"), dec!(0.15), date(2025, 3, 12)),
            entry("g1", Some("c1"), dec!(0.20), date(2025, 3, 28)),
        ];

        let progress = compute_goal_progress(&g, Some(&cfg), &entries);

        assert_eq!(progress.accumulated, dec!(0.45));
        assert_eq!(progress.percentage, dec!(56.25));
        assert_eq!(progress.state, ComplianceState::EnProgreso);
        assert_eq!(progress.entry_count, 3);
    }

    #[test]
    fn test_accumulable_goal_takes_latest_entry() {
        let g = goal("g2", true, false);
        let cfg = config("g2", "c1", Some(dec!(100)));
        // Out of date order on purpose
        let entries = vec![
            entry("g2", Some("c1"), dec!(70), date(2025, 2, 1)),
            entry("g2", Some("c1"), dec!(95), date(2025, 3, 1)),
            entry("g2", Some("c1"), dec!(30), date(2025, 1, 1)),
        ];

        let progress = compute_goal_progress(&g, Some(&cfg), &entries);

        assert_eq!(progress.accumulated, dec!(95));
        assert_eq!(progress.percentage, dec!(95));
        assert_eq!(progress.state, ComplianceState::EnProgreso);
    }

    #[test]
    fn test_same_day_entries_last_one_wins() {
        let g = goal("g3", true, false);
        let entries = vec![
            entry("g3", None, dec!(10), date(2025, 5, 5)),
            entry("g3", None, dec!(12), date(2025, 5, 5)),
        ];
        assert_eq!(accumulate(&g, &entries), dec!(12));
    }

    #[test]
    fn test_zero_or_missing_target_is_sin_meta() {
        let g = goal("g4", false, false);
        let entries = vec![entry("g4", Some("c1"), dec!(10), date(2025, 1, 1))];

        let zero = compute_goal_progress(&g, Some(&config("g4", "c1", Some(Decimal::ZERO))), &entries);
        assert_eq!(zero.state, ComplianceState::SinMeta);
        assert_eq!(zero.percentage, Decimal::ZERO);

        let missing = compute_goal_progress(&g, Some(&config("g4", "c1", None)), &entries);
        assert_eq!(missing.state, ComplianceState::SinMeta);
        assert_eq!(missing.raw_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_state_classification() {
        let target = Some(dec!(10));
        assert_eq!(classify(dec!(10), target), ComplianceState::Cumplida);
        assert_eq!(classify(dec!(12), target), ComplianceState::Cumplida);
        assert_eq!(classify(dec!(0.01), target), ComplianceState::EnProgreso);
        assert_eq!(classify(Decimal::ZERO, target), ComplianceState::Rezagada);
    }

    #[test]
    fn test_overshoot_keeps_raw_percentage() {
        let g = goal("g5", false, false);
        let cfg = config("g5", "c1", Some(dec!(50)));
        let entries = vec![entry("g5", Some("c1"), dec!(75), date(2025, 1, 1))];

        let progress = compute_goal_progress(&g, Some(&cfg), &entries);

        assert_eq!(progress.raw_percentage, dec!(150));
        assert_eq!(progress.percentage, dec!(100));
        assert_eq!(progress.state, ComplianceState::Cumplida);
    }

    #[test]
    fn test_no_entries_means_zero() {
        let g = goal("g6", true, true);
        let progress = compute_goal_progress(&g, Some(&config("g6", "c1", Some(dec!(0.5)))), &[]);
        assert_eq!(progress.accumulated, Decimal::ZERO);
        assert_eq!(progress.state, ComplianceState::Rezagada);
    }

    #[test]
    fn test_oversized_stored_entries_saturate_instead_of_panicking() {
        let g = goal("g9", false, false);
        let cfg = config("g9", "c1", Some(dec!(100)));
        let huge = dec!(50000000000000000000000000000);
        let entries = vec![
            entry("g9", Some("c1"), huge, date(2025, 1, 1)),
            entry("g9", Some("c1"), huge, date(2025, 2, 1)),
        ];

        let progress = compute_goal_progress(&g, Some(&cfg), &entries);

        assert_eq!(progress.accumulated, Decimal::MAX);
        assert_eq!(progress.percentage, dec!(100));
        assert_eq!(progress.state, ComplianceState::Cumplida);
    }

    #[test]
    fn test_compute_for_cycle_skips_unconfigured_goals() {
        let g = goal("g7", false, false);
        let c = cycle("c1", date(2025, 1, 1), date(2025, 12, 31));
        assert!(compute_for_cycle(&g, &c, &[config("g7", "other", Some(dec!(1)))], &[]).is_none());
    }

    #[test]
    fn test_compute_for_cycle_filters_entries_by_cycle() {
        let g = goal("g8", false, false);
        let c = cycle("c1", date(2025, 1, 1), date(2025, 12, 31));
        let entries = vec![
            entry("g8", Some("c1"), dec!(5), date(2025, 2, 1)),
            entry("g8", Some("c0"), dec!(100), date(2024, 2, 1)),
            // legacy row inside the window counts, outside does not
            entry("g8", None, dec!(3), date(2025, 6, 1)),
            entry("g8", None, dec!(40), date(2023, 6, 1)),
            entry("other", Some("c1"), dec!(7), date(2025, 2, 1)),
        ];

        let progress = compute_for_cycle(&g, &c, &[config("g8", "c1", Some(dec!(10)))], &entries)
            .expect("configured goal");

        assert_eq!(progress.accumulated, dec!(8));
        assert_eq!(progress.entry_count, 2);
        assert_eq!(progress.state, ComplianceState::EnProgreso);
    }
}
