use chrono::{Datelike, NaiveDate};
use contracts::domain::a003_cycle::Cycle;
use contracts::domain::a006_goal::Goal;
use contracts::domain::a008_progress_entry::ProgressEntry;
use contracts::shared::compliance::MonthSlot;
use rust_decimal::Decimal;

use super::percent;

/// Trailing window used when there is no cycle at all
const FALLBACK_MONTHS: i32 = 12;

fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

fn slot_from_index(index: i32) -> MonthSlot {
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    let label = NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b").to_string())
        .unwrap_or_default();
    MonthSlot { label, year, month }
}

/// Calendar months covered by `[start, end]`, zero when end precedes start
pub fn month_count(start: NaiveDate, end: NaiveDate) -> usize {
    if end < start {
        return 0;
    }
    (month_index(end) - month_index(start) + 1) as usize
}

/// Months of the cycle, or the 12 months ending with `today` without one
pub fn build_monthly_series(cycle: Option<&Cycle>, today: NaiveDate) -> Vec<MonthSlot> {
    match cycle {
        Some(cycle) => {
            if cycle.end_date < cycle.start_date {
                return vec![];
            }
            (month_index(cycle.start_date)..=month_index(cycle.end_date))
                .map(slot_from_index)
                .collect()
        }
        None => {
            let last = month_index(today);
            (last - FALLBACK_MONTHS + 1..=last)
                .map(slot_from_index)
                .collect()
        }
    }
}

fn in_month(entry: &ProgressEntry, slot: &MonthSlot) -> bool {
    entry.recorded_on.year() == slot.year && entry.recorded_on.month() == slot.month
}

/// Display value of one goal for one month.
///
/// Accumulable goals show the last entry of the month, the rest the month's
/// sum. A month with no entries or a zero value shows "-".
pub fn monthly_value_for_goal(goal: &Goal, entries: &[ProgressEntry], slot: &MonthSlot) -> String {
    let month_entries = entries
        .iter()
        .filter(|e| e.goal_id == goal.id && in_month(e, slot));

    let value = if goal.accumulable {
        month_entries
            .max_by_key(|e| e.recorded_on)
            .map(|e| e.value)
            .unwrap_or(Decimal::ZERO)
    } else {
        percent::saturating_sum(month_entries.map(|e| e.value))
    };

    if value > Decimal::ZERO {
        percent::format_display(value, goal.percentage)
    } else {
        "-".to_string()
    }
}
