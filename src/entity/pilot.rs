use sea_orm::entity::prelude::*;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pilot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pilot_id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub license_no: String,
    pub rank: Rank,
    pub base_destination_id: i32,
    pub active: bool,
}

impl Model {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Rank {
    #[sea_orm(string_value = "Captain")]
    Captain,
    #[sea_orm(string_value = "First Officer")]
    FirstOfficer,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Captain => f.write_str("Captain"),
            Rank::FirstOfficer => f.write_str("First Officer"),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::destination::Entity",
        from = "Column::BaseDestinationId",
        to = "super::destination::Column::DestinationId"
    )]
    BaseDestination,
}

impl Related<super::destination::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BaseDestination.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
