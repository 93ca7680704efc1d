pub mod destinations;
pub mod flight_query;
pub mod flights;
pub mod pilots;
pub mod reports;

pub use destinations::{list_destinations, set_destination_active};
pub use flight_query::{FlightListing, FlightQuery, flight_listing, run_flight_query};
pub use flights::{NewFlight, add_flight, delete_flight, find_flight, update_flight_status};
pub use pilots::{CrewMember, ScheduledFlight, assign_pilot, flight_crew, pilot_schedule};
pub use reports::{DestinationCount, PilotCount, flights_per_destination, flights_per_pilot};

use crate::error::{FlightError, FlightResult};

/// Trims a field and rejects it when nothing is left.
pub(crate) fn required<'a>(field: &str, value: &'a str) -> FlightResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FlightError::validation(format!("{field} is required")));
    }
    Ok(value)
}

/// Trims a field; blank means "not given".
pub(crate) fn optional(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}
