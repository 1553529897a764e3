use anyhow::Result;
use contracts::domain::a010_risk::{Mitigation, Risk};
use sea_orm::{EntityTrait, FromQueryResult, QueryOrder, Statement};

use crate::shared::data::codec::parse_date;
use crate::shared::data::db::get_connection;

pub mod mitigation {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "a010_mitigation")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub risk_id: String,
        pub action: String,
        pub action_date: String,
        pub responsible: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

impl TryFrom<mitigation::Model> for Mitigation {
    type Error = anyhow::Error;

    fn try_from(m: mitigation::Model) -> Result<Self> {
        Ok(Mitigation {
            action_date: parse_date(&m.action_date)?,
            id: m.id,
            risk_id: m.risk_id,
            action: m.action,
            responsible: m.responsible,
        })
    }
}

/// Risk joined with the goal its activity belongs to
#[derive(Debug, Clone, FromQueryResult)]
pub struct RiskWithGoal {
    pub id: String,
    pub activity_id: Option<String>,
    pub statement: String,
    pub probability: i32,
    pub impact: i32,
    pub goal_id: Option<String>,
    pub goal_key: Option<String>,
    pub goal_name: Option<String>,
    pub goal_department_id: Option<String>,
}

impl RiskWithGoal {
    pub fn risk(&self) -> Risk {
        Risk {
            id: self.id.clone(),
            activity_id: self.activity_id.clone(),
            statement: self.statement.clone(),
            probability: self.probability,
            impact: self.impact,
        }
    }
}

pub async fn list_with_goals() -> Result<Vec<RiskWithGoal>> {
    let db = get_connection();

    let sql = r#"
        SELECT
            r.id,
            r.activity_id,
            r.statement,
            r.probability,
            r.impact,
            g.id AS goal_id,
            g.key AS goal_key,
            g.name AS goal_name,
            g.department_id AS goal_department_id
        FROM a010_risk r
        LEFT JOIN a009_activity act ON r.activity_id = act.id
        LEFT JOIN a006_goal g ON act.goal_id = g.id
        ORDER BY r.id
    "#;

    let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, sql, []);
    let rows = RiskWithGoal::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}

/// All mitigations ordered by date, oldest first
pub async fn list_mitigations() -> Result<Vec<Mitigation>> {
    let db = get_connection();
    let models = mitigation::Entity::find()
        .order_by_asc(mitigation::Column::ActionDate)
        .all(db)
        .await?;
    models.into_iter().map(Mitigation::try_from).collect()
}
