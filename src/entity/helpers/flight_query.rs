use sea_orm::sea_query::{Alias, Expr, Func, SimpleExpr};
use sea_orm::{
    DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select,
};

use crate::entity::{destination, flight};
use crate::error::FlightResult;

const ORIGIN_ALIAS: &str = "o";
const DESTINATION_ALIAS: &str = "d";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlightQuery {
    pub destination: Option<String>,
    pub status: Option<String>,
    // YYYY-MM-DD, compared with the first 10 characters of departure_dt
    pub date: Option<String>,
}

impl FlightQuery {
    pub fn from_input(destination: &str, status: &str, date: &str) -> Self {
        FlightQuery {
            destination: non_blank(destination),
            status: non_blank(status),
            date: non_blank(date),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct FlightListing {
    pub flight_id: i32,
    pub flight_no: String,
    pub origin: String,
    pub destination: String,
    pub departure_dt: String,
    pub status: String,
}

fn iata_code_of(alias: &str) -> SimpleExpr {
    Expr::col((Alias::new(alias), destination::Column::IataCode)).into()
}

pub fn flight_listing(criteria: &FlightQuery) -> Select<flight::Entity> {
    let mut query = flight::Entity::find()
        .select_only()
        .column(flight::Column::FlightId)
        .column(flight::Column::FlightNo)
        .column_as(iata_code_of(ORIGIN_ALIAS), "origin")
        .column_as(iata_code_of(DESTINATION_ALIAS), "destination")
        .column(flight::Column::DepartureDt)
        .column(flight::Column::Status)
        .join_as(
            JoinType::InnerJoin,
            flight::Relation::Origin.def(),
            Alias::new(ORIGIN_ALIAS),
        )
        .join_as(
            JoinType::InnerJoin,
            flight::Relation::Destination.def(),
            Alias::new(DESTINATION_ALIAS),
        );

    // Clause order is fixed: destination, status, date
    if let Some(code) = &criteria.destination {
        query = query.filter(Expr::expr(iata_code_of(DESTINATION_ALIAS)).eq(code.as_str()));
    }
    if let Some(status) = &criteria.status {
        query = query.filter(
            Expr::col((flight::Entity, flight::Column::Status)).eq(status.as_str()),
        );
    }
    if let Some(date) = &criteria.date {
        let day = Func::cust(Alias::new("substr"))
            .arg(Expr::col((flight::Entity, flight::Column::DepartureDt)))
            .arg(1)
            .arg(10);
        query = query.filter(Expr::expr(day).eq(date.as_str()));
    }

    query
        .order_by_asc(flight::Column::DepartureDt)
        .order_by_asc(flight::Column::FlightId)
}

pub async fn run_flight_query(
    db: &DatabaseConnection,
    criteria: &FlightQuery,
) -> FlightResult<Vec<FlightListing>> {
    log::debug!("Running flight query: {criteria:?}");
    let rows = flight_listing(criteria)
        .into_model::<FlightListing>()
        .all(db)
        .await?;
    Ok(rows)
}
