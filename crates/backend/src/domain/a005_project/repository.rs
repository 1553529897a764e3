use anyhow::Result;
use contracts::domain::a005_project::Project;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a005_project")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub key: String,
    pub name: String,
    pub objective_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Project {
    fn from(m: Model) -> Self {
        Project {
            id: m.id,
            key: m.key,
            name: m.name,
            objective_id: m.objective_id,
        }
    }
}

pub async fn list_all() -> Result<Vec<Project>> {
    let db = get_connection();
    let models = Entity::find()
        .order_by_asc(Column::Key)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}

pub async fn list_by_objectives(objective_ids: &[String]) -> Result<Vec<Project>> {
    if objective_ids.is_empty() {
        return Ok(vec![]);
    }
    let db = get_connection();
    let models = Entity::find()
        .filter(Column::ObjectiveId.is_in(objective_ids.iter().cloned()))
        .order_by_asc(Column::Key)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}
