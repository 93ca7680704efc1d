use chrono::NaiveDateTime;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use super::{optional, required};
use crate::entity::flight::{DEFAULT_STATUS, TIMESTAMP_FORMAT};
use crate::entity::{aircraft, destination, flight};
use crate::error::{FlightError, FlightResult};

/// A flight as typed by the operator. Blank optional fields take their
/// defaults: status `Scheduled`, tickets `0`, terminal/gate/notes absent.
#[derive(Clone, Debug, Default)]
pub struct NewFlight {
    pub flight_no: String,
    /// Origin IATA code
    pub origin: String,
    /// Destination IATA code
    pub destination: String,
    /// Aircraft registration
    pub aircraft: String,
    pub departure: String,
    pub arrival: String,
    pub status: String,
    pub terminal: String,
    pub gate: String,
    pub tickets_sold: String,
    pub notes: String,
}

fn parse_timestamp(field: &str, value: &str) -> FlightResult<NaiveDateTime> {
    let value = required(field, value)?;
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| {
        FlightError::validation(format!("{field} must look like YYYY-MM-DD HH:MM, got '{value}'"))
    })
}

async fn destination_by_code(
    db: &DatabaseConnection,
    code: &str,
) -> FlightResult<Option<destination::Model>> {
    let found = destination::Entity::find()
        .filter(destination::Column::IataCode.eq(code))
        .one(db)
        .await?;
    Ok(found)
}

pub async fn find_flight(db: &DatabaseConnection, flight_id: i32) -> FlightResult<flight::Model> {
    flight::Entity::find_by_id(flight_id)
        .one(db)
        .await?
        .ok_or(FlightError::FlightNotFound(flight_id))
}

/// Inserts a flight after resolving its origin, destination and aircraft.
/// Nothing is written if any of the three references is missing.
pub async fn add_flight(db: &DatabaseConnection, new: &NewFlight) -> FlightResult<i32> {
    let flight_no = required("flight number", &new.flight_no)?;
    let origin_code = required("origin code", &new.origin)?;
    let destination_code = required("destination code", &new.destination)?;
    let registration = required("aircraft registration", &new.aircraft)?;
    let departure = parse_timestamp("departure", &new.departure)?;
    let arrival = parse_timestamp("arrival", &new.arrival)?;
    if arrival < departure {
        return Err(FlightError::validation(
            "arrival must not be before departure",
        ));
    }
    let tickets_sold = match optional(&new.tickets_sold) {
        None => 0,
        Some(tickets) => tickets.parse::<u32>().map_err(|_| {
            FlightError::validation(format!(
                "tickets sold must be a non-negative number, got '{tickets}'"
            ))
        })?,
    };

    // Independent lookups
    let origin = destination_by_code(db, origin_code).await?;
    let target = destination_by_code(db, destination_code).await?;
    let plane = aircraft::Entity::find()
        .filter(aircraft::Column::Registration.eq(registration))
        .one(db)
        .await?;

    let origin = origin.ok_or_else(|| FlightError::DestinationNotFound(origin_code.to_string()))?;
    let target =
        target.ok_or_else(|| FlightError::DestinationNotFound(destination_code.to_string()))?;
    let plane = plane.ok_or_else(|| FlightError::AircraftNotFound(registration.to_string()))?;

    if i64::from(tickets_sold) > i64::from(plane.seat_capacity) {
        return Err(FlightError::validation(format!(
            "tickets sold ({tickets_sold}) exceeds the {} seats of {}",
            plane.seat_capacity, plane.registration
        )));
    }
    let tickets_sold = i32::try_from(tickets_sold)
        .map_err(|_| FlightError::validation("tickets sold is too large"))?;

    let model = flight::ActiveModel {
        flight_no: Set(flight_no.to_string()),
        origin_id: Set(origin.destination_id),
        destination_id: Set(target.destination_id),
        aircraft_id: Set(plane.aircraft_id),
        departure_dt: Set(departure.format(TIMESTAMP_FORMAT).to_string()),
        arrival_dt: Set(arrival.format(TIMESTAMP_FORMAT).to_string()),
        status: Set(optional(&new.status).unwrap_or(DEFAULT_STATUS).to_string()),
        terminal: Set(optional(&new.terminal).map(str::to_string)),
        gate: Set(optional(&new.gate).map(str::to_string)),
        tickets_sold: Set(tickets_sold),
        notes: Set(optional(&new.notes).map(str::to_string)),
        ..Default::default()
    };

    let inserted = model.insert(db).await?;
    log::info!(
        "Added flight {} ({}) {} -> {}",
        inserted.flight_id,
        inserted.flight_no,
        origin.iata_code,
        target.iata_code
    );
    Ok(inserted.flight_id)
}

pub async fn update_flight_status(
    db: &DatabaseConnection,
    flight_id: i32,
    status: &str,
) -> FlightResult<()> {
    let status = required("status", status)?;

    let result = flight::Entity::update_many()
        .col_expr(flight::Column::Status, Expr::value(status))
        .filter(flight::Column::FlightId.eq(flight_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(FlightError::FlightNotFound(flight_id));
    }
    log::info!("Flight {flight_id} status set to {status}");
    Ok(())
}

/// Deletes by primary key. A flight with crew assigned is kept by the
/// store's foreign key and comes back as an integrity error.
pub async fn delete_flight(db: &DatabaseConnection, flight_id: i32) -> FlightResult<()> {
    let result = flight::Entity::delete_by_id(flight_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(FlightError::FlightNotFound(flight_id));
    }
    log::info!("Deleted flight {flight_id}");
    Ok(())
}
