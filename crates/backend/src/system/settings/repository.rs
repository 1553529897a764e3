use anyhow::Result;
use contracts::system::settings::CaptureWindow;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

const CAPTURE_ENABLED: &str = "capture_enabled";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sys_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Current capture window. A missing row means capture is open.
pub async fn get_capture_window() -> Result<CaptureWindow> {
    let db = get_connection();
    let row = Entity::find_by_id(CAPTURE_ENABLED).one(db).await?;
    Ok(match row {
        Some(row) => CaptureWindow {
            capture_enabled: parse_flag(&row.value),
        },
        None => CaptureWindow::default(),
    })
}

pub async fn set_capture_window(window: CaptureWindow) -> Result<()> {
    let db = get_connection();
    let active = ActiveModel {
        key: Set(CAPTURE_ENABLED.to_string()),
        value: Set(window.capture_enabled.to_string()),
    };
    Entity::insert(active)
        .on_conflict(
            OnConflict::column(Column::Key)
                .update_column(Column::Value)
                .to_owned(),
        )
        .exec(db)
        .await?;
    tracing::info!("Capture window set to {}", window.capture_enabled);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
