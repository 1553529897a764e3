use anyhow::Result;
use contracts::domain::a003_cycle::Cycle;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

use crate::shared::data::codec::parse_date;
use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_cycle")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub program_id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub duration: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Cycle {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self> {
        Ok(Cycle {
            start_date: parse_date(&m.start_date)?,
            end_date: parse_date(&m.end_date)?,
            id: m.id,
            program_id: m.program_id,
            name: m.name,
            duration: m.duration,
            is_active: m.is_active,
        })
    }
}

/// All cycles, most recent start first
pub async fn list_all() -> Result<Vec<Cycle>> {
    let db = get_connection();
    let models = Entity::find()
        .order_by_desc(Column::StartDate)
        .all(db)
        .await?;
    models.into_iter().map(Cycle::try_from).collect()
}

pub async fn get_by_id(id: &str) -> Result<Option<Cycle>> {
    let db = get_connection();
    let model = Entity::find_by_id(id).one(db).await?;
    model.map(Cycle::try_from).transpose()
}
