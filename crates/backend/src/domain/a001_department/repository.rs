use anyhow::Result;
use contracts::domain::a001_department::Department;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_department")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Department {
    fn from(m: Model) -> Self {
        Department {
            id: m.id,
            name: m.name,
        }
    }
}

pub async fn list_all() -> Result<Vec<Department>> {
    let db = get_connection();
    let models = Entity::find().order_by_asc(Column::Name).all(db).await?;
    Ok(models.into_iter().map(Into::into).collect())
}
