use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema, Statement};

use crate::entity::{aircraft, destination, flight, pilot, pilot_assignment};

async fn create_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

/// Creates the five tables, parents before children.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());
    create_table(db, &schema, destination::Entity).await?;
    create_table(db, &schema, aircraft::Entity).await?;
    create_table(db, &schema, pilot::Entity).await?;
    create_table(db, &schema, flight::Entity).await?;
    create_table(db, &schema, pilot_assignment::Entity).await?;
    log::info!("Flight schema created");
    Ok(())
}

pub async fn is_initialized(db: &DatabaseConnection) -> Result<bool, DbErr> {
    let row = db
        .query_one(Statement::from_sql_and_values(
            db.get_database_backend(),
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            ["flight".into()],
        ))
        .await?;
    let count: i64 = match row {
        Some(row) => row.try_get_by_index(0)?,
        None => 0,
    };
    Ok(count > 0)
}
