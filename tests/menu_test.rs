//! Scripted sessions through the operator menu

mod common;

use common::{database::*, fixtures::*};
use flightdesk::cli::menu::Menu;
use flightdesk::data::configuration::MenuConfig;
use flightdesk::entity::helpers::find_flight;
use flightdesk::entity::{destination, flight};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::io::Cursor;

async fn session(db: &DatabaseConnection, script: &str) -> String {
    let config = MenuConfig::default();
    let mut menu = Menu::new(db, &config, Cursor::new(script.to_string()), Vec::new());
    menu.run().await.expect("Menu loop failed");
    String::from_utf8(menu.into_output()).unwrap()
}

#[tokio::test]
async fn test_view_all_flights_then_exit() {
    let connector = setup_test_database().await;
    let db = connector.connection().unwrap();
    create_schedule(db).await;

    let output = session(db, "1\n0\n").await;
    assert!(output.contains("12) Report: flights per pilot"));
    assert!(output.contains("flight_id | flight_no | origin | destination | departure_dt | status"));
    assert!(output.contains("| AX200 | LHR | CDG | 2026-02-03 06:00 | Scheduled"));
    assert!(output.trim_end().ends_with("Goodbye!"));

    let early = output.find("AX200").unwrap();
    let next_day = output.find("AX202").unwrap();
    assert!(early < next_day);
}

#[tokio::test]
async fn test_search_upper_cases_the_code() {
    let connector = setup_test_database().await;
    let db = connector.connection().unwrap();
    create_schedule(db).await;

    let output = session(db, "2\njfk\n\n\n0\n").await;
    assert!(output.contains("| AX201 | CDG | JFK |"));
    assert!(!output.contains("AX200"));

    let output = session(db, "2\n\nDeparted\n\n0\n").await;
    assert!(output.contains("(no results)"));
}

#[tokio::test]
async fn test_end_of_input_exits() {
    let connector = setup_test_database().await;
    let db = connector.connection().unwrap();

    let output = session(db, "").await;
    assert!(output.contains("Goodbye!"));
}

#[tokio::test]
async fn test_unknown_choice_and_bad_id_keep_the_loop_running() {
    let connector = setup_test_database().await;
    let db = connector.connection().unwrap();
    create_schedule(db).await;

    let output = session(db, "42\n5\nabc\n9\n0\n").await;
    assert!(output.contains("Please choose a number from 0 to 12."));
    assert!(output.contains("Error: Invalid input: flight id must be a number"));
    // The loop reached the destination listing afterwards
    assert!(output.contains("iata_code | city | country | timezone | active"));
}

#[tokio::test]
async fn test_add_flight_through_menu() {
    let connector = setup_test_database().await;
    let db = connector.connection().unwrap();
    create_schedule(db).await;

    let script = "4\nAX300\nlhr\njfk\nG-AX01\n2026-02-06 07:15\n2026-02-06 15:00\n\nT5\n\n42\n\n0\n";
    let output = session(db, script).await;
    assert!(output.contains("Flight added."), "{output}");
    assert!(output.contains("status: Scheduled"));
    assert!(output.contains("gate: None"));
    assert!(output.contains("tickets_sold: 42"));

    let added = flight::Entity::find()
        .filter(flight::Column::FlightNo.eq("AX300"))
        .one(db)
        .await
        .unwrap()
        .expect("flight was not inserted");
    assert_eq!(added.terminal.as_deref(), Some("T5"));
}

#[tokio::test]
async fn test_add_flight_with_unknown_aircraft_reports_reference() {
    let connector = setup_test_database().await;
    let db = connector.connection().unwrap();
    create_schedule(db).await;

    let script = "4\nAX300\nLHR\nJFK\nN-NOPE\n2026-02-06 07:15\n2026-02-06 15:00\n\n\n\n\n\n0\n";
    let output = session(db, script).await;
    assert!(output.contains("Error: Aircraft not found: N-NOPE"));
    assert_eq!(count::<flight::Entity>(db).await, 4);
}

#[tokio::test]
async fn test_delete_needs_confirmation() {
    let connector = setup_test_database().await;
    let db = connector.connection().unwrap();
    let schedule = create_schedule(db).await;

    let output = session(db, &format!("6\n{}\nno\n0\n", schedule.cancelled)).await;
    assert!(output.contains("Delete cancelled."));
    assert!(find_flight(db, schedule.cancelled).await.is_ok());

    let output = session(db, &format!("6\n{}\nyes\n0\n", schedule.cancelled)).await;
    assert!(output.contains("Flight deleted."));
    assert!(find_flight(db, schedule.cancelled).await.is_err());
}

#[tokio::test]
async fn test_delete_crewed_flight_reports_integrity_error() {
    let connector = setup_test_database().await;
    let db = connector.connection().unwrap();
    let schedule = create_schedule(db).await;

    let output = session(db, &format!("6\n{}\nyes\n0\n", schedule.early)).await;
    assert!(output.contains("Error: Integrity violation (foreign key)"), "{output}");
    assert!(find_flight(db, schedule.early).await.is_ok());
}

#[tokio::test]
async fn test_status_update_and_crew_through_menu() {
    let connector = setup_test_database().await;
    let db = connector.connection().unwrap();
    let schedule = create_schedule(db).await;

    let script = format!(
        "5\n{id}\nBoarding\n7\n{id}\n{pilot}\n\n3\n{id}\n0\n",
        id = schedule.next_day,
        pilot = ACTIVE_CAPTAIN
    );
    let output = session(db, &script).await;
    assert!(output.contains("Status updated."));
    assert!(output.contains("Pilot assigned"));
    assert!(output.contains(&format!("Amelia Wright | {ACTIVE_CAPTAIN} | Captain")));
    assert_eq!(find_flight(db, schedule.next_day).await.unwrap().status, "Boarding");
}

#[tokio::test]
async fn test_destination_toggle_through_menu() {
    let connector = setup_test_database().await;
    let db = connector.connection().unwrap();
    create_schedule(db).await;

    let output = session(db, "10\nsgn\n1\n10\nXYZ\n1\n0\n").await;
    assert!(output.contains("Destination SGN updated."));
    assert!(output.contains("Error: Destination not found: XYZ"));

    let sgn = destination::Entity::find()
        .filter(destination::Column::IataCode.eq("SGN"))
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert!(sgn.active);
}

#[tokio::test]
async fn test_reports_through_menu() {
    let connector = setup_test_database().await;
    let db = connector.connection().unwrap();
    create_schedule(db).await;

    let output = session(db, "11\n12\n0\n").await;
    assert!(output.contains("CDG | Paris | Testland | 3"));
    assert!(output.contains(&format!("Noah Bennett | {ACTIVE_FIRST_OFFICER} | 1")));
}
