use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::required;
use crate::entity::destination;
use crate::error::{FlightError, FlightResult};

pub async fn list_destinations(db: &DatabaseConnection) -> FlightResult<Vec<destination::Model>> {
    let all = destination::Entity::find()
        .order_by_asc(destination::Column::IataCode)
        .all(db)
        .await?;
    Ok(all)
}

/// Sets the active flag of a destination. `flag` must be exactly `"0"` or
/// `"1"`. Returns the number of rows changed; an unknown code changes none
/// and is reported as not found.
pub async fn set_destination_active(
    db: &DatabaseConnection,
    code: &str,
    flag: &str,
) -> FlightResult<u64> {
    let active = match flag {
        "0" => false,
        "1" => true,
        other => {
            return Err(FlightError::validation(format!(
                "active flag must be 0 or 1, got '{other}'"
            )));
        }
    };
    let code = required("destination code", code)?;

    let result = destination::Entity::update_many()
        .col_expr(destination::Column::Active, Expr::value(active))
        .filter(destination::Column::IataCode.eq(code))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        log::warn!("No destination with code {code}");
        return Err(FlightError::DestinationNotFound(code.to_string()));
    }
    log::info!("Destination {code} active = {active}");
    Ok(result.rows_affected)
}
