use anyhow::Result;
use contracts::domain::a009_activity::Activity;
use contracts::enums::activity_state::ActivityState;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, QueryOrder};
use serde::{Deserialize, Serialize};

use crate::shared::data::codec::parse_date;
use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a009_activity")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub goal_id: Option<String>,
    pub cycle_id: Option<String>,
    pub department_id: Option<String>,
    pub name: Option<String>,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub state: String,
    pub responsible: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Activity {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self> {
        let state = ActivityState::from_code(&m.state).unwrap_or_else(|| {
            tracing::warn!("Activity {} has unknown state '{}'", m.id, m.state);
            ActivityState::default()
        });
        Ok(Activity {
            start_date: parse_date(&m.start_date)?,
            end_date: parse_date(&m.end_date)?,
            state,
            id: m.id,
            goal_id: m.goal_id,
            cycle_id: m.cycle_id,
            department_id: m.department_id,
            name: m.name,
            description: m.description,
            responsible: m.responsible,
        })
    }
}

/// Activities of the cycle plus those registered without a cycle
pub async fn list_for_cycle(cycle_id: &str) -> Result<Vec<Activity>> {
    let db = get_connection();
    let models = Entity::find()
        .filter(
            Condition::any()
                .add(Column::CycleId.eq(cycle_id))
                .add(Column::CycleId.is_null()),
        )
        .order_by_asc(Column::StartDate)
        .all(db)
        .await?;
    models.into_iter().map(Activity::try_from).collect()
}

pub async fn list_all() -> Result<Vec<Activity>> {
    let db = get_connection();
    let models = Entity::find()
        .order_by_asc(Column::StartDate)
        .all(db)
        .await?;
    models.into_iter().map(Activity::try_from).collect()
}
