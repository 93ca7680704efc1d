pub mod aircraft;
pub mod destination;
pub mod flight;
pub mod helpers;
pub mod pilot;
pub mod pilot_assignment;
