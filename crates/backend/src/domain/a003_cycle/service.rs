use anyhow::Result;
use contracts::domain::a003_cycle::Cycle;

use super::repository;

/// Requested cycle, else the active one, else the most recent by start date.
///
/// An id that matches no cycle resolves to nothing.
pub fn pick_cycle(cycles: &[Cycle], requested: Option<&str>) -> Option<Cycle> {
    if let Some(id) = requested.filter(|id| !id.trim().is_empty()) {
        return cycles.iter().find(|c| c.id == id).cloned();
    }

    cycles
        .iter()
        .filter(|c| c.is_active)
        .max_by_key(|c| c.start_date)
        .or_else(|| cycles.iter().max_by_key(|c| c.start_date))
        .cloned()
}

pub async fn resolve_cycle(requested: Option<&str>) -> Result<Option<Cycle>> {
    let cycles = repository::list_all().await?;
    let cycle = pick_cycle(&cycles, requested);
    match (&cycle, requested) {
        (None, Some(id)) => tracing::warn!("Cycle '{}' not found", id),
        (None, None) => tracing::warn!("No cycles registered"),
        _ => {}
    }
    Ok(cycle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn cycle(id: &str, start_year: i32, is_active: bool) -> Cycle {
        Cycle {
            id: id.to_string(),
            program_id: "p1".to_string(),
            name: format!("Ciclo {start_year}"),
            start_date: NaiveDate::from_ymd_opt(start_year, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(start_year, 12, 31).unwrap(),
            duration: 12,
            is_active,
        }
    }

    #[test]
    fn test_requested_cycle_wins() {
        let cycles = vec![cycle("c1", 2023, false), cycle("c2", 2024, true)];
        assert_eq!(pick_cycle(&cycles, Some("c1")).unwrap().id, "c1");
    }

    #[test]
    fn test_unknown_requested_cycle_resolves_to_nothing() {
        let cycles = vec![cycle("c1", 2023, true)];
        assert!(pick_cycle(&cycles, Some("missing")).is_none());
    }

    #[test]
    fn test_active_before_most_recent() {
        let cycles = vec![cycle("c1", 2023, true), cycle("c2", 2025, false)];
        assert_eq!(pick_cycle(&cycles, None).unwrap().id, "c1");
        assert_eq!(pick_cycle(&cycles, Some("")).unwrap().id, "c1");
    }

    #[test]
    fn test_most_recent_without_active() {
        let cycles = vec![cycle("c1", 2023, false), cycle("c2", 2025, false)];
        assert_eq!(pick_cycle(&cycles, None).unwrap().id, "c2");
        assert!(pick_cycle(&[], None).is_none());
    }
}
