//! `SeaORM` Entity for classifications table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "classifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// `profit-loss` or `balance-sheet`.
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::coas::Entity")]
    Coas,
}

impl Related<super::coas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
