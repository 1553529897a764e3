use anyhow::Result;
use contracts::domain::a002_program::Program;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::data::codec::parse_date;
use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_program")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub key: String,
    pub name: String,
    pub short_name: String,
    pub start_date: String,
    pub end_date: String,
    pub duration: i32,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Program {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self> {
        Ok(Program {
            start_date: parse_date(&m.start_date)?,
            end_date: parse_date(&m.end_date)?,
            id: m.id,
            key: m.key,
            name: m.name,
            short_name: m.short_name,
            duration: m.duration,
            is_active: m.is_active,
        })
    }
}

pub async fn get_by_id(id: &str) -> Result<Option<Program>> {
    let db = get_connection();
    let model = Entity::find_by_id(id).one(db).await?;
    model.map(Program::try_from).transpose()
}
