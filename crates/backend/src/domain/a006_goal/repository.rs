use anyhow::Result;
use contracts::domain::a006_goal::Goal;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a006_goal")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub key: String,
    pub name: Option<String>,
    pub statement: String,
    pub project_id: String,
    pub department_id: Option<String>,
    pub indicator: String,
    pub unit: String,
    pub calculation_method: String,
    pub accumulable: bool,
    pub percentage: bool,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Goal {
    fn from(m: Model) -> Self {
        Goal {
            id: m.id,
            key: m.key,
            name: m.name,
            statement: m.statement,
            project_id: m.project_id,
            department_id: m.department_id,
            indicator: m.indicator,
            unit: m.unit,
            calculation_method: m.calculation_method,
            accumulable: m.accumulable,
            percentage: m.percentage,
            active: m.active,
        }
    }
}

/// Goals ordered by key; `only_active` drops deactivated ones
pub async fn list(only_active: bool) -> Result<Vec<Goal>> {
    let db = get_connection();
    let mut query = Entity::find();
    if only_active {
        query = query.filter(Column::Active.eq(true));
    }
    let models = query
        .order_by_asc(Column::Key)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn get_by_id(id: &str) -> Result<Option<Goal>> {
    let db = get_connection();
    let model = Entity::find_by_id(id).one(db).await?;
    Ok(model.map(Into::into))
}
