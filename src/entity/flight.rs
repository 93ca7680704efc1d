use sea_orm::entity::prelude::*;

/// Timestamps are stored as text in this layout so that the first ten
/// characters are the calendar day.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub const DEFAULT_STATUS: &str = "Scheduled";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "flight")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub flight_id: i32,
    pub flight_no: String,
    pub origin_id: i32,
    pub destination_id: i32,
    pub aircraft_id: i32,
    pub departure_dt: String,
    pub arrival_dt: String,

    /// Scheduled/Delayed/Departed/Cancelled by convention, not enforced
    pub status: String,
    pub terminal: Option<String>,
    pub gate: Option<String>,
    pub tickets_sold: i32,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::destination::Entity",
        from = "Column::OriginId",
        to = "super::destination::Column::DestinationId"
    )]
    Origin,

    #[sea_orm(
        belongs_to = "super::destination::Entity",
        from = "Column::DestinationId",
        to = "super::destination::Column::DestinationId"
    )]
    Destination,

    #[sea_orm(
        belongs_to = "super::aircraft::Entity",
        from = "Column::AircraftId",
        to = "super::aircraft::Column::AircraftId"
    )]
    Aircraft,
}

impl Related<super::aircraft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aircraft.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
