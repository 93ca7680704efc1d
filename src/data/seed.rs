use anyhow::Context;
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
    TransactionTrait,
};
use std::collections::HashMap;

use crate::entity::flight::{DEFAULT_STATUS, TIMESTAMP_FORMAT};
use crate::entity::pilot::Rank;
use crate::entity::{aircraft, destination, flight, pilot, pilot_assignment};

const SEED: u64 = 7;

/// (code, city, country, timezone, active)
const DESTINATIONS: [(&str, &str, &str, &str, bool); 15] = [
    ("LHR", "London", "United Kingdom", "Europe/London", true),
    ("CDG", "Paris", "France", "Europe/Paris", true),
    ("FCO", "Rome", "Italy", "Europe/Rome", true),
    ("JFK", "New York", "United States", "America/New_York", true),
    ("LAX", "Los Angeles", "United States", "America/Los_Angeles", true),
    ("DXB", "Dubai", "United Arab Emirates", "Asia/Dubai", true),
    ("HND", "Tokyo", "Japan", "Asia/Tokyo", true),
    ("SIN", "Singapore", "Singapore", "Asia/Singapore", true),
    ("AMS", "Amsterdam", "Netherlands", "Europe/Amsterdam", true),
    ("MAD", "Madrid", "Spain", "Europe/Madrid", true),
    ("IST", "Istanbul", "Türkiye", "Europe/Istanbul", true),
    ("DUB", "Dublin", "Ireland", "Europe/Dublin", true),
    ("BKK", "Bangkok", "Thailand", "Asia/Bangkok", true),
    ("SGN", "Ho Chi Minh City", "Vietnam", "Asia/Ho_Chi_Minh", false),
    ("MNL", "Manila", "Philippines", "Asia/Manila", true),
];

/// (registration, model, seats)
const AIRCRAFT: [(&str, &str, i32); 10] = [
    ("G-AX01", "A320-200", 180),
    ("G-AX02", "B737-800", 189),
    ("N-AX03", "B787-9", 290),
    ("A6-AX04", "A380-800", 525),
    ("JA-AX05", "A350-900", 325),
    ("F-AX06", "A321neo", 220),
    ("EI-AX07", "B777-300ER", 396),
    ("PH-AX08", "E190", 100),
    ("EC-AX09", "A330-300", 300),
    ("HS-AX10", "B767-300", 260),
];

/// (first, last, license, rank, base)
const PILOTS: [(&str, &str, &str, Rank, &str); 12] = [
    ("Amelia", "Wright", "LIC-UK-1001", Rank::Captain, "LHR"),
    ("Noah", "Bennett", "LIC-UK-1002", Rank::FirstOfficer, "LHR"),
    ("Sofia", "Marino", "LIC-IT-2001", Rank::Captain, "FCO"),
    ("Luca", "Rossi", "LIC-IT-2002", Rank::FirstOfficer, "FCO"),
    ("Camille", "Dupont", "LIC-FR-3001", Rank::Captain, "CDG"),
    ("Hugo", "Martin", "LIC-FR-3002", Rank::FirstOfficer, "CDG"),
    ("Aisha", "Khan", "LIC-US-4001", Rank::Captain, "JFK"),
    ("Ethan", "Lee", "LIC-US-4002", Rank::FirstOfficer, "JFK"),
    ("Kenji", "Sato", "LIC-JP-5001", Rank::Captain, "HND"),
    ("Mina", "Tanaka", "LIC-JP-5002", Rank::FirstOfficer, "HND"),
    ("Omar", "Haddad", "LIC-AE-6001", Rank::Captain, "DXB"),
    ("Layla", "Nasser", "LIC-AE-6002", Rank::FirstOfficer, "DXB"),
];

// SGN is inactive and never flown to
const ROUTE_AIRPORTS: [&str; 14] = [
    "LHR", "CDG", "FCO", "JFK", "LAX", "DXB", "HND", "SIN", "AMS", "MAD", "IST", "DUB", "BKK",
    "MNL",
];
const TERMINALS: [Option<&str>; 4] = [Some("T1"), Some("T2"), Some("T3"), None];
const GATES: [Option<&str>; 7] = [
    Some("A1"),
    Some("B2"),
    Some("C4"),
    Some("D7"),
    Some("E5"),
    Some("Z99"),
    None,
];
const NOTES: [Option<&str>; 4] = [None, Some("Weather watch"), Some("VIP on board"), None];

const CANCELLED_FLIGHT: usize = 4;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub destinations: usize,
    pub aircraft: usize,
    pub pilots: usize,
    pub flights: usize,
    pub assignments: usize,
}

/// Writes all demo rows in one transaction; a failure leaves the tables as they were.
pub async fn populate(db: &DatabaseConnection) -> anyhow::Result<SeedSummary> {
    let txn = db.begin().await?;
    let summary = match insert_rows(&txn).await {
        Ok(summary) => summary,
        Err(err) => {
            txn.rollback().await?;
            return Err(err);
        }
    };
    txn.commit().await.context("failed to commit demo data")?;

    log::info!("Seeded database: {summary:?}");
    Ok(summary)
}

async fn insert_rows(db: &impl ConnectionTrait) -> anyhow::Result<SeedSummary> {
    let mut summary = SeedSummary::default();
    let mut rng = StdRng::seed_from_u64(SEED);

    let mut destination_ids = HashMap::new();
    for (code, city, country, timezone, active) in DESTINATIONS {
        let row = destination::ActiveModel {
            iata_code: Set(code.to_string()),
            city: Set(city.to_string()),
            country: Set(country.to_string()),
            timezone: Set(timezone.to_string()),
            active: Set(active),
            ..Default::default()
        }
        .insert(db)
        .await
        .with_context(|| format!("failed to insert destination {code}"))?;
        destination_ids.insert(code, row.destination_id);
        summary.destinations += 1;
    }

    let mut fleet = Vec::new();
    for (registration, model, seats) in AIRCRAFT {
        let row = aircraft::ActiveModel {
            registration: Set(registration.to_string()),
            model: Set(model.to_string()),
            seat_capacity: Set(seats),
            active: Set(true),
            ..Default::default()
        }
        .insert(db)
        .await
        .with_context(|| format!("failed to insert aircraft {registration}"))?;
        fleet.push(row);
        summary.aircraft += 1;
    }

    for (first_name, last_name, license_no, rank, base) in PILOTS {
        let base_destination_id = *destination_ids
            .get(base)
            .with_context(|| format!("unknown base {base}"))?;
        pilot::ActiveModel {
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            license_no: Set(license_no.to_string()),
            rank: Set(rank),
            base_destination_id: Set(base_destination_id),
            active: Set(true),
            ..Default::default()
        }
        .insert(db)
        .await
        .with_context(|| format!("failed to insert pilot {license_no}"))?;
        summary.pilots += 1;
    }

    // Each aircraft flies once, three hours after the previous one
    let start = NaiveDate::from_ymd_opt(2026, 2, 3)
        .and_then(|day| day.and_hms_opt(6, 0, 0))
        .context("invalid schedule start")?;
    for (i, plane) in fleet.iter().enumerate() {
        let origin = *ROUTE_AIRPORTS.choose(&mut rng).context("no airports")?;
        let targets: Vec<&str> = ROUTE_AIRPORTS
            .iter()
            .copied()
            .filter(|code| *code != origin)
            .collect();
        let target = *targets.choose(&mut rng).context("no airports")?;

        let departure = start + Duration::hours(3 * i as i64);
        let arrival = departure + Duration::hours(2);
        let status = if i == CANCELLED_FLIGHT {
            "Cancelled"
        } else {
            DEFAULT_STATUS
        };

        flight::ActiveModel {
            flight_no: Set(format!("AX{}", 200 + i)),
            origin_id: Set(destination_ids[origin]),
            destination_id: Set(destination_ids[target]),
            aircraft_id: Set(plane.aircraft_id),
            departure_dt: Set(departure.format(TIMESTAMP_FORMAT).to_string()),
            arrival_dt: Set(arrival.format(TIMESTAMP_FORMAT).to_string()),
            status: Set(status.to_string()),
            terminal: Set(TERMINALS.choose(&mut rng).copied().flatten().map(str::to_string)),
            gate: Set(GATES.choose(&mut rng).copied().flatten().map(str::to_string)),
            tickets_sold: Set(rng.gen_range(0..=plane.seat_capacity)),
            notes: Set(NOTES.choose(&mut rng).copied().flatten().map(str::to_string)),
            ..Default::default()
        }
        .insert(db)
        .await
        .with_context(|| format!("failed to insert flight for {}", plane.registration))?;
        summary.flights += 1;
    }

    summary.assignments = assign_crews(db).await?;
    Ok(summary)
}

// One captain and one first officer per flight, round-robin in departure order
async fn assign_crews(db: &impl ConnectionTrait) -> anyhow::Result<usize> {
    let pilots = pilot::Entity::find()
        .order_by_asc(pilot::Column::PilotId)
        .all(db)
        .await?;
    let (captains, first_officers): (Vec<_>, Vec<_>) = pilots
        .into_iter()
        .filter(|p| p.active)
        .partition(|p| p.rank == Rank::Captain);
    anyhow::ensure!(
        !captains.is_empty() && !first_officers.is_empty(),
        "need at least one captain and one first officer"
    );

    let flights = flight::Entity::find()
        .order_by_asc(flight::Column::DepartureDt)
        .all(db)
        .await?;

    let mut assigned = 0;
    for (n, scheduled) in flights
        .iter()
        .filter(|f| f.status != "Cancelled")
        .enumerate()
    {
        let crew = [
            &captains[n % captains.len()],
            &first_officers[n % first_officers.len()],
        ];
        for member in crew {
            pilot_assignment::ActiveModel {
                flight_id: Set(scheduled.flight_id),
                pilot_id: Set(member.pilot_id),
                role: Set(member.rank.to_string()),
                ..Default::default()
            }
            .insert(db)
            .await?;
            assigned += 1;
        }
    }
    Ok(assigned)
}
