//! `customers` table model
//!
//! The address is embedded in the customer row (same lifetime, no
//! identity of its own). The cpf column carries the unique constraint
//! the service layer relies on.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub cpf: String,
    pub email: String,
    pub income: Decimal,
    pub password: String,
    pub zip_code: String,
    pub street: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::credits::Entity")]
    Credits,
}

impl Related<super::credits::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Credits.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
