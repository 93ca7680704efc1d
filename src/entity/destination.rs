use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "destination")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub destination_id: i32,
    /// Three-letter IATA code, the user-facing key
    #[sea_orm(unique)]
    pub iata_code: String,
    pub city: String,
    pub country: String,
    /// e.g., Europe/London
    pub timezone: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
