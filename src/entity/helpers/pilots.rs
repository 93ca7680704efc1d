use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::flight_query::{FlightQuery, flight_listing};
use super::flights::find_flight;
use super::{optional, required};
use crate::entity::{pilot, pilot_assignment};
use crate::error::{FlightError, FlightResult};

/// `first_name || ' ' || last_name` of the joined pilot row
pub(crate) fn pilot_name() -> SimpleExpr {
    Expr::cust(r#""pilot"."first_name" || ' ' || "pilot"."last_name""#)
}

#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct CrewMember {
    pub assignment_id: i32,
    pub pilot: String,
    pub license_no: String,
    pub role: String,
}

/// A flight listing line plus the pilot's role on it
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct ScheduledFlight {
    pub flight_id: i32,
    pub flight_no: String,
    pub origin: String,
    pub destination: String,
    pub departure_dt: String,
    pub status: String,
    pub role: String,
}

/// Puts an active pilot on a flight. The flight and the pilot are both
/// checked before anything is inserted.
pub async fn assign_pilot(
    db: &DatabaseConnection,
    flight_id: i32,
    license_no: &str,
    role: &str,
) -> FlightResult<i32> {
    let license_no = required("license number", license_no)?;

    find_flight(db, flight_id).await?;

    let crew = pilot::Entity::find()
        .filter(pilot::Column::LicenseNo.eq(license_no))
        .filter(pilot::Column::Active.eq(true))
        .one(db)
        .await?
        .ok_or_else(|| FlightError::PilotNotFoundOrInactive(license_no.to_string()))?;

    // Blank role falls back to the pilot's rank
    let role = optional(role).map_or_else(|| crew.rank.to_string(), str::to_string);

    let link = pilot_assignment::ActiveModel {
        flight_id: Set(flight_id),
        pilot_id: Set(crew.pilot_id),
        role: Set(role.clone()),
        ..Default::default()
    };
    let inserted = link.insert(db).await?;
    log::info!(
        "Assigned {} ({}) to flight {flight_id} as {role}",
        crew.full_name(),
        crew.license_no
    );
    Ok(inserted.assignment_id)
}

pub async fn flight_crew(db: &DatabaseConnection, flight_id: i32) -> FlightResult<Vec<CrewMember>> {
    find_flight(db, flight_id).await?;

    let crew = pilot_assignment::Entity::find()
        .select_only()
        .column(pilot_assignment::Column::AssignmentId)
        .column_as(pilot_name(), "pilot")
        .column(pilot::Column::LicenseNo)
        .column(pilot_assignment::Column::Role)
        .join(JoinType::InnerJoin, pilot_assignment::Relation::Pilot.def())
        .filter(pilot_assignment::Column::FlightId.eq(flight_id))
        .order_by_asc(pilot_assignment::Column::AssignmentId)
        .into_model::<CrewMember>()
        .all(db)
        .await?;
    Ok(crew)
}

/// Flights a pilot is assigned to, by departure. Inactive pilots still have
/// a viewable schedule.
pub async fn pilot_schedule(
    db: &DatabaseConnection,
    license_no: &str,
) -> FlightResult<Vec<ScheduledFlight>> {
    let license_no = required("license number", license_no)?;

    let crew = pilot::Entity::find()
        .filter(pilot::Column::LicenseNo.eq(license_no))
        .one(db)
        .await?
        .ok_or_else(|| FlightError::PilotNotFound(license_no.to_string()))?;

    let flights = flight_listing(&FlightQuery::default())
        .column(pilot_assignment::Column::Role)
        .join_rev(JoinType::InnerJoin, pilot_assignment::Relation::Flight.def())
        .filter(pilot_assignment::Column::PilotId.eq(crew.pilot_id))
        .into_model::<ScheduledFlight>()
        .all(db)
        .await?;
    Ok(flights)
}
