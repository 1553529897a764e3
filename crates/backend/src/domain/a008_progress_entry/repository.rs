use anyhow::Result;
use contracts::domain::a003_cycle::Cycle;
use contracts::domain::a008_progress_entry::ProgressEntry;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::shared::compliance::entry_in_cycle;
use crate::shared::data::codec::{date_to_text, decimal_to_text, parse_date, parse_decimal};
use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a008_progress_entry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub goal_id: String,
    pub cycle_id: Option<String>,
    pub department_id: Option<String>,
    pub value: String,
    pub recorded_on: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ProgressEntry {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self> {
        Ok(ProgressEntry {
            value: parse_decimal(&m.value)?,
            recorded_on: parse_date(&m.recorded_on)?,
            id: m.id,
            goal_id: m.goal_id,
            cycle_id: m.cycle_id,
            department_id: m.department_id,
        })
    }
}

/// Entries counted for the cycle, in storage order by date.
///
/// Legacy rows without cycle are fetched too and kept only when their date
/// falls inside the cycle window.
pub async fn list_for_cycle(cycle: &Cycle) -> Result<Vec<ProgressEntry>> {
    let db = get_connection();
    let models = Entity::find()
        .filter(
            Condition::any()
                .add(Column::CycleId.eq(cycle.id.as_str()))
                .add(Column::CycleId.is_null()),
        )
        .order_by_asc(Column::RecordedOn)
        .all(db)
        .await?;

    let mut entries = Vec::with_capacity(models.len());
    for model in models {
        let entry = ProgressEntry::try_from(model)?;
        if entry_in_cycle(&entry, cycle) {
            entries.push(entry);
        }
    }
    Ok(entries)
}

pub async fn list_all() -> Result<Vec<ProgressEntry>> {
    let db = get_connection();
    let models = Entity::find()
        .order_by_asc(Column::RecordedOn)
        .all(db)
        .await?;
    models.into_iter().map(ProgressEntry::try_from).collect()
}

pub async fn insert(entry: &ProgressEntry) -> Result<()> {
    let db = get_connection();
    let active = ActiveModel {
        id: Set(entry.id.clone()),
        goal_id: Set(entry.goal_id.clone()),
        cycle_id: Set(entry.cycle_id.clone()),
        department_id: Set(entry.department_id.clone()),
        value: Set(decimal_to_text(entry.value)),
        recorded_on: Set(date_to_text(entry.recorded_on)),
    };
    Entity::insert(active).exec(db).await?;
    Ok(())
}
