use anyhow::Result;
use contracts::domain::a007_goal_cycle_config::GoalCycleConfig;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::shared::data::codec::{decimal_to_text, parse_optional_decimal};
use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a007_goal_cycle_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub goal_id: String,
    pub cycle_id: String,
    pub baseline: Option<String>,
    pub target: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for GoalCycleConfig {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self> {
        Ok(GoalCycleConfig {
            baseline: parse_optional_decimal(m.baseline.as_deref())?,
            target: parse_optional_decimal(m.target.as_deref())?,
            id: m.id,
            goal_id: m.goal_id,
            cycle_id: m.cycle_id,
        })
    }
}

pub async fn list_by_cycle(cycle_id: &str) -> Result<Vec<GoalCycleConfig>> {
    let db = get_connection();
    let models = Entity::find()
        .filter(Column::CycleId.eq(cycle_id))
        .all(db)
        .await?;
    models.into_iter().map(GoalCycleConfig::try_from).collect()
}

pub async fn list_all() -> Result<Vec<GoalCycleConfig>> {
    let db = get_connection();
    let models = Entity::find().all(db).await?;
    models.into_iter().map(GoalCycleConfig::try_from).collect()
}

pub async fn find(goal_id: &str, cycle_id: &str) -> Result<Option<GoalCycleConfig>> {
    let db = get_connection();
    let model = Entity::find()
        .filter(Column::GoalId.eq(goal_id))
        .filter(Column::CycleId.eq(cycle_id))
        .one(db)
        .await?;
    model.map(GoalCycleConfig::try_from).transpose()
}

/// Insert or update by (goal_id, cycle_id). Returns true when inserted.
pub async fn upsert(config: &GoalCycleConfig) -> Result<bool> {
    let db = get_connection();
    let existing = Entity::find()
        .filter(Column::GoalId.eq(config.goal_id.as_str()))
        .filter(Column::CycleId.eq(config.cycle_id.as_str()))
        .one(db)
        .await?;

    let baseline = config.baseline.map(decimal_to_text);
    let target = config.target.map(decimal_to_text);

    if let Some(existing) = existing {
        let mut active: ActiveModel = existing.into();
        active.baseline = Set(baseline);
        active.target = Set(target);
        Entity::update(active).exec(db).await?;
        Ok(false)
    } else {
        let active = ActiveModel {
            id: Set(config.id.clone()),
            goal_id: Set(config.goal_id.clone()),
            cycle_id: Set(config.cycle_id.clone()),
            baseline: Set(baseline),
            target: Set(target),
        };
        Entity::insert(active).exec(db).await?;
        Ok(true)
    }
}
