use anyhow::Result;
use contracts::dashboards::d404_risk_summary::{RiskLevelCount, RiskReportResponse, RiskRow};
use contracts::domain::a010_risk::Mitigation;
use contracts::enums::risk_level::RiskLevel;
use std::cmp::Reverse;

use crate::domain::a010_risk::repository::{self, RiskWithGoal};

pub async fn get_risk_report() -> Result<RiskReportResponse> {
    let risks = repository::list_with_goals().await?;
    let mitigations = repository::list_mitigations().await?;
    Ok(build_risk_report(&risks, &mitigations))
}

/// `mitigations` must be ordered oldest first; the last one per risk is shown
pub fn build_risk_report(risks: &[RiskWithGoal], mitigations: &[Mitigation]) -> RiskReportResponse {
    let mut rows: Vec<RiskRow> = risks
        .iter()
        .map(|row| {
            let risk = row.risk();
            let value = risk.value();
            let level = RiskLevel::from_value(value);
            let own: Vec<&Mitigation> = mitigations.iter().filter(|m| m.risk_id == risk.id).collect();

            RiskRow {
                goal_title: row
                    .goal_name
                    .clone()
                    .filter(|n| !n.trim().is_empty())
                    .or_else(|| row.goal_key.clone())
                    .unwrap_or_else(|| "-".to_string()),
                statement: risk.statement.clone(),
                probability: risk.probability,
                impact: risk.impact,
                value,
                level,
                color: level.color().to_string(),
                mitigation_count: own.len() as u32,
                last_mitigation: own
                    .last()
                    .map(|m| m.action.clone())
                    .unwrap_or_else(|| "Sin acciones".to_string()),
                risk_id: risk.id,
            }
        })
        .collect();

    // Stable: equal levels keep their original order
    rows.sort_by_key(|r| Reverse(r.level));

    let level_counts = RiskLevel::all()
        .into_iter()
        .map(|level| RiskLevelCount {
            level,
            count: rows.iter().filter(|r| r.level == level).count() as u32,
        })
        .collect();

    RiskReportResponse {
        total_risks: rows.len() as u32,
        has_data: !rows.is_empty(),
        level_counts,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn risk(id: &str, probability: i32, impact: i32, goal_name: Option<&str>) -> RiskWithGoal {
        RiskWithGoal {
            id: id.to_string(),
            activity_id: Some("a1".to_string()),
            statement: format!("Riesgo {id}"),
            probability,
            impact,
            goal_id: goal_name.map(|_| "g1".to_string()),
            goal_key: goal_name.map(|_| "M-1".to_string()),
            goal_name: goal_name.map(str::to_string),
            goal_department_id: None,
        }
    }

    fn mitigation(risk_id: &str, action: &str, day: u32) -> Mitigation {
        Mitigation {
            id: format!("m-{risk_id}-{day}"),
            risk_id: risk_id.to_string(),
            action: action.to_string(),
            action_date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            responsible: "Coordinación".to_string(),
        }
    }

    #[test]
    fn test_levels_and_order() {
        let risks = vec![
            risk("r1", 5, 5, Some("Meta uno")),
            risk("r2", 10, 10, None),
            risk("r3", 6, 9, Some("")),
            risk("r4", 7, 7, Some("Meta dos")),
        ];
        let mitigations = vec![
            mitigation("r2", "Plan inicial", 1),
            mitigation("r2", "Plan ajustado", 15),
        ];

        let report = build_risk_report(&risks, &mitigations);

        let order: Vec<(&str, RiskLevel)> =
            report.rows.iter().map(|r| (r.risk_id.as_str(), r.level)).collect();
        assert_eq!(
            order,
            vec![
                ("r2", RiskLevel::Critico),
                ("r3", RiskLevel::Alto),
                ("r4", RiskLevel::Medio),
                ("r1", RiskLevel::Bajo),
            ]
        );

        let r2 = &report.rows[0];
        assert_eq!(r2.value, 100);
        assert_eq!(r2.color, "danger");
        assert_eq!(r2.goal_title, "-");
        assert_eq!(r2.mitigation_count, 2);
        assert_eq!(r2.last_mitigation, "Plan ajustado");

        assert_eq!(report.rows[1].goal_title, "M-1");
        assert_eq!(report.rows[3].last_mitigation, "Sin acciones");
        assert_eq!(report.total_risks, 4);
        assert!(report.level_counts.iter().all(|c| c.count == 1));
    }

    #[test]
    fn test_no_risks() {
        let report = build_risk_report(&[], &[]);
        assert!(!report.has_data);
        assert_eq!(report.level_counts.len(), 4);
    }
}
