use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryOrder, QuerySelect,
    RelationTrait,
};

use super::pilots::pilot_name;
use crate::entity::{destination, flight, pilot, pilot_assignment};
use crate::error::FlightResult;

#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct DestinationCount {
    pub iata_code: String,
    pub city: String,
    pub country: String,
    pub flights: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct PilotCount {
    pub pilot: String,
    pub license_no: String,
    pub flights: i64,
}

/// Flights grouped by where they are going, busiest first.
pub async fn flights_per_destination(
    db: &DatabaseConnection,
) -> FlightResult<Vec<DestinationCount>> {
    let flights: SimpleExpr = Expr::col((flight::Entity, flight::Column::FlightId)).count();

    let rows = flight::Entity::find()
        .select_only()
        .column(destination::Column::IataCode)
        .column(destination::Column::City)
        .column(destination::Column::Country)
        .column_as(flights.clone(), "flights")
        .join(JoinType::InnerJoin, flight::Relation::Destination.def())
        .group_by(destination::Column::DestinationId)
        .group_by(destination::Column::IataCode)
        .group_by(destination::Column::City)
        .group_by(destination::Column::Country)
        .order_by_desc(flights)
        .order_by_asc(destination::Column::IataCode)
        .into_model::<DestinationCount>()
        .all(db)
        .await?;
    Ok(rows)
}

/// Assignments grouped by pilot, busiest first.
pub async fn flights_per_pilot(db: &DatabaseConnection) -> FlightResult<Vec<PilotCount>> {
    let flights: SimpleExpr =
        Expr::col((pilot_assignment::Entity, pilot_assignment::Column::AssignmentId)).count();

    let rows = pilot_assignment::Entity::find()
        .select_only()
        .column_as(pilot_name(), "pilot")
        .column(pilot::Column::LicenseNo)
        .column_as(flights.clone(), "flights")
        .join(JoinType::InnerJoin, pilot_assignment::Relation::Pilot.def())
        .group_by(pilot::Column::PilotId)
        .group_by(pilot::Column::FirstName)
        .group_by(pilot::Column::LastName)
        .group_by(pilot::Column::LicenseNo)
        .order_by_desc(flights)
        .order_by_asc(pilot::Column::LicenseNo)
        .into_model::<PilotCount>()
        .all(db)
        .await?;
    Ok(rows)
}
