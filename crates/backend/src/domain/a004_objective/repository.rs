use anyhow::Result;
use contracts::domain::a004_objective::Objective;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_objective")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub key: Option<String>,
    pub description: String,
    pub program_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Objective {
    fn from(m: Model) -> Self {
        Objective {
            id: m.id,
            key: m.key,
            description: m.description,
            program_id: m.program_id,
        }
    }
}

pub async fn list_by_program(program_id: &str) -> Result<Vec<Objective>> {
    let db = get_connection();
    let models = Entity::find()
        .filter(Column::ProgramId.eq(program_id))
        .order_by_asc(Column::Key)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Into::into).collect())
}
