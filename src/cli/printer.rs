use std::io::{self, Write};

use crate::entity::{destination, flight};
use crate::entity::helpers::{
    CrewMember, DestinationCount, FlightListing, PilotCount, ScheduledFlight,
};

const RULE_WIDTH: usize = 80;

/// A row the printer knows how to lay out.
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// Writes a header line, a rule and one line per row, or `(no results)`.
pub fn print_rows<W: Write, T: Tabular>(out: &mut W, rows: &[T]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "(no results)");
    }
    writeln!(out, "{}", T::headers().join(" | "))?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for row in rows {
        writeln!(out, "{}", row.cells().join(" | "))?;
    }
    Ok(())
}

fn or_none(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| String::from("None"))
}

impl Tabular for FlightListing {
    fn headers() -> &'static [&'static str] {
        &[
            "flight_id",
            "flight_no",
            "origin",
            "destination",
            "departure_dt",
            "status",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.flight_id.to_string(),
            self.flight_no.clone(),
            self.origin.clone(),
            self.destination.clone(),
            self.departure_dt.clone(),
            self.status.clone(),
        ]
    }
}

impl Tabular for ScheduledFlight {
    fn headers() -> &'static [&'static str] {
        &[
            "flight_id",
            "flight_no",
            "origin",
            "destination",
            "departure_dt",
            "status",
            "role",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.flight_id.to_string(),
            self.flight_no.clone(),
            self.origin.clone(),
            self.destination.clone(),
            self.departure_dt.clone(),
            self.status.clone(),
            self.role.clone(),
        ]
    }
}

impl Tabular for CrewMember {
    fn headers() -> &'static [&'static str] {
        &["assignment_id", "pilot", "license_no", "role"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.assignment_id.to_string(),
            self.pilot.clone(),
            self.license_no.clone(),
            self.role.clone(),
        ]
    }
}

impl Tabular for destination::Model {
    fn headers() -> &'static [&'static str] {
        &["iata_code", "city", "country", "timezone", "active"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.iata_code.clone(),
            self.city.clone(),
            self.country.clone(),
            self.timezone.clone(),
            u8::from(self.active).to_string(),
        ]
    }
}

impl Tabular for DestinationCount {
    fn headers() -> &'static [&'static str] {
        &["iata_code", "city", "country", "flights"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.iata_code.clone(),
            self.city.clone(),
            self.country.clone(),
            self.flights.to_string(),
        ]
    }
}

impl Tabular for PilotCount {
    fn headers() -> &'static [&'static str] {
        &["pilot", "license_no", "flights"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.pilot.clone(),
            self.license_no.clone(),
            self.flights.to_string(),
        ]
    }
}

/// Key/value view of a single flight, used after it is added.
pub fn print_flight_detail<W: Write>(out: &mut W, flight: &flight::Model) -> io::Result<()> {
    let fields = [
        ("flight_id", flight.flight_id.to_string()),
        ("flight_no", flight.flight_no.clone()),
        ("departure_dt", flight.departure_dt.clone()),
        ("arrival_dt", flight.arrival_dt.clone()),
        ("status", flight.status.clone()),
        ("terminal", or_none(&flight.terminal)),
        ("gate", or_none(&flight.gate)),
        ("tickets_sold", flight.tickets_sold.to_string()),
        ("notes", or_none(&flight.notes)),
    ];
    for (name, value) in fields {
        writeln!(out, "{name}: {value}")?;
    }
    Ok(())
}
