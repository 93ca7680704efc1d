//! Integration tests for destinations

mod common;

use common::{database::*, fixtures::*};
use flightdesk::entity::destination;
use flightdesk::entity::helpers::{list_destinations, set_destination_active};
use flightdesk::error::{FlightError, IntegrityKind};
use sea_orm::{ActiveModelTrait, ActiveValue::Set};

async fn active_flags(db: &sea_orm::DatabaseConnection) -> Vec<(String, bool)> {
    list_destinations(db)
        .await
        .unwrap()
        .into_iter()
        .map(|d| (d.iata_code, d.active))
        .collect()
}

#[tokio::test]
async fn test_destinations_are_listed_by_code() {
    let connector = setup_test_database().await;
    let db = connector.connection().unwrap();
    create_schedule(db).await;

    let codes: Vec<String> = active_flags(db).await.into_iter().map(|(c, _)| c).collect();
    assert_eq!(codes, vec!["CDG", "JFK", "LHR", "SGN"]);
}

#[tokio::test]
async fn test_toggle_existing_destination_changes_one_row() {
    let connector = setup_test_database().await;
    let db = connector.connection().unwrap();
    create_schedule(db).await;

    assert_eq!(set_destination_active(db, "SGN", "1").await.unwrap(), 1);
    assert_eq!(set_destination_active(db, "LHR", "0").await.unwrap(), 1);

    assert_eq!(
        active_flags(db).await,
        vec![
            ("CDG".to_string(), true),
            ("JFK".to_string(), true),
            ("LHR".to_string(), false),
            ("SGN".to_string(), true),
        ]
    );
}

#[tokio::test]
async fn test_toggle_unknown_destination_changes_nothing() {
    let connector = setup_test_database().await;
    let db = connector.connection().unwrap();
    create_schedule(db).await;
    let before = active_flags(db).await;

    let err = set_destination_active(db, "ZZZ", "0").await.unwrap_err();
    assert!(matches!(err, FlightError::DestinationNotFound(ref code) if code == "ZZZ"));
    assert_eq!(active_flags(db).await, before);
    assert_eq!(count::<destination::Entity>(db).await, 4);
}

#[tokio::test]
async fn test_flag_must_be_zero_or_one() {
    let connector = setup_test_database().await;
    let db = connector.connection().unwrap();
    create_schedule(db).await;
    let before = active_flags(db).await;

    for flag in ["", "2", "yes", "true", " 1"] {
        let err = set_destination_active(db, "LHR", flag).await.unwrap_err();
        assert!(matches!(err, FlightError::Validation(_)), "flag {flag:?}");
    }
    assert_eq!(active_flags(db).await, before);
}

#[tokio::test]
async fn test_duplicate_code_is_a_unique_violation() {
    let connector = setup_test_database().await;
    let db = connector.connection().unwrap();
    create_schedule(db).await;

    let err = destination::ActiveModel {
        iata_code: Set("LHR".to_string()),
        city: Set("Elsewhere".to_string()),
        country: Set("Testland".to_string()),
        timezone: Set("UTC".to_string()),
        active: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap_err();

    let err = FlightError::from(err);
    assert_eq!(err.integrity_kind(), Some(IntegrityKind::Unique));
    assert_eq!(count::<destination::Entity>(db).await, 4);
}
