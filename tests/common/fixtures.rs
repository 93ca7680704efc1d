//! Small, hand-written flight schedule for tests
#![allow(dead_code)]

use flightdesk::entity::pilot::Rank;
use flightdesk::entity::{aircraft, destination, flight, pilot, pilot_assignment};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};
use std::collections::HashMap;

/// Ids of the fixture flights
pub struct Schedule {
    /// AX200 LHR -> CDG, 2026-02-03 06:00, Scheduled, crewed
    pub early: i32,
    /// AX201 CDG -> JFK, 2026-02-03 09:00, Delayed
    pub delayed: i32,
    /// AX202 JFK -> CDG, 2026-02-04 06:00, Scheduled
    pub next_day: i32,
    /// AX203 LHR -> CDG, 2026-02-03 12:00, Cancelled
    pub cancelled: i32,
}

pub const ACTIVE_CAPTAIN: &str = "LIC-UK-1001";
pub const ACTIVE_FIRST_OFFICER: &str = "LIC-UK-1002";
pub const INACTIVE_CAPTAIN: &str = "LIC-XX-9999";

async fn create_destination(db: &DatabaseConnection, code: &str, city: &str, active: bool) -> i32 {
    destination::ActiveModel {
        iata_code: Set(code.to_string()),
        city: Set(city.to_string()),
        country: Set("Testland".to_string()),
        timezone: Set("UTC".to_string()),
        active: Set(active),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create destination")
    .destination_id
}

async fn create_pilot(
    db: &DatabaseConnection,
    first: &str,
    last: &str,
    license: &str,
    rank: Rank,
    base: i32,
    active: bool,
) -> i32 {
    pilot::ActiveModel {
        first_name: Set(first.to_string()),
        last_name: Set(last.to_string()),
        license_no: Set(license.to_string()),
        rank: Set(rank),
        base_destination_id: Set(base),
        active: Set(active),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create pilot")
    .pilot_id
}

#[allow(clippy::too_many_arguments)]
async fn create_flight(
    db: &DatabaseConnection,
    number: &str,
    origin: i32,
    target: i32,
    aircraft_id: i32,
    departure: &str,
    arrival: &str,
    status: &str,
) -> i32 {
    flight::ActiveModel {
        flight_no: Set(number.to_string()),
        origin_id: Set(origin),
        destination_id: Set(target),
        aircraft_id: Set(aircraft_id),
        departure_dt: Set(departure.to_string()),
        arrival_dt: Set(arrival.to_string()),
        status: Set(status.to_string()),
        terminal: Set(None),
        gate: Set(None),
        tickets_sold: Set(0),
        notes: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create flight")
    .flight_id
}

/// Destinations LHR, CDG, JFK (active) and SGN (inactive); aircraft G-AX01
/// (180 seats) and PH-AX08 (100 seats); two active pilots and one inactive;
/// four flights inserted out of departure order.
pub async fn create_schedule(db: &DatabaseConnection) -> Schedule {
    let mut codes = HashMap::new();
    for (code, city, active) in [
        ("LHR", "London", true),
        ("CDG", "Paris", true),
        ("JFK", "New York", true),
        ("SGN", "Ho Chi Minh City", false),
    ] {
        codes.insert(code, create_destination(db, code, city, active).await);
    }

    let mut planes = Vec::new();
    for (registration, seats) in [("G-AX01", 180), ("PH-AX08", 100)] {
        let plane = aircraft::ActiveModel {
            registration: Set(registration.to_string()),
            model: Set("Test".to_string()),
            seat_capacity: Set(seats),
            active: Set(true),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create aircraft");
        planes.push(plane.aircraft_id);
    }

    let captain = create_pilot(
        db,
        "Amelia",
        "Wright",
        ACTIVE_CAPTAIN,
        Rank::Captain,
        codes["LHR"],
        true,
    )
    .await;
    let first_officer = create_pilot(
        db,
        "Noah",
        "Bennett",
        ACTIVE_FIRST_OFFICER,
        Rank::FirstOfficer,
        codes["LHR"],
        true,
    )
    .await;
    create_pilot(
        db,
        "Retired",
        "Pilot",
        INACTIVE_CAPTAIN,
        Rank::Captain,
        codes["CDG"],
        false,
    )
    .await;

    let next_day = create_flight(
        db,
        "AX202",
        codes["JFK"],
        codes["CDG"],
        planes[0],
        "2026-02-04 06:00",
        "2026-02-04 08:00",
        "Scheduled",
    )
    .await;
    let cancelled = create_flight(
        db,
        "AX203",
        codes["LHR"],
        codes["CDG"],
        planes[1],
        "2026-02-03 12:00",
        "2026-02-03 14:00",
        "Cancelled",
    )
    .await;
    let early = create_flight(
        db,
        "AX200",
        codes["LHR"],
        codes["CDG"],
        planes[0],
        "2026-02-03 06:00",
        "2026-02-03 08:00",
        "Scheduled",
    )
    .await;
    let delayed = create_flight(
        db,
        "AX201",
        codes["CDG"],
        codes["JFK"],
        planes[1],
        "2026-02-03 09:00",
        "2026-02-03 11:00",
        "Delayed",
    )
    .await;

    for (pilot_id, role) in [(captain, "Captain"), (first_officer, "First Officer")] {
        pilot_assignment::ActiveModel {
            flight_id: Set(early),
            pilot_id: Set(pilot_id),
            role: Set(role.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create assignment");
    }

    Schedule {
        early,
        delayed,
        next_day,
        cancelled,
    }
}
