use super::schema::{self, Table};
use super::{with_lease, Database, DbError};
use crate::models;
use tracing::Instrument;

/// Also drops the Galaxy and Star tables, which reference this one.
pub async fn initiate(db: &Database) -> Result<(), DbError> {
    schema::reset(db, Table::AstronomicalObject).await
}

/// Fails with a foreign-key violation when `object.universe` does not exist.
pub async fn insert(db: &Database, object: models::AstronomicalObject) -> Result<(), DbError> {
    let query_span = tracing::info_span!("Saving new astronomical object into the database");
    with_lease(db, "insert astronomical object", move |conn| {
        Box::pin(async move {
            let result = sqlx::query(
                r#"
                INSERT INTO AstronomicalObject (AstronomicalName, DistanceFromEarth, Universe)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(&object.name)
            .bind(object.distance)
            .bind(&object.universe)
            .execute(&mut **conn)
            .await?;
            DbError::check_affected(result.rows_affected())
        })
    })
    .instrument(query_span)
    .await
}

pub async fn fetch_all(db: &Database) -> Result<Vec<models::AstronomicalObject>, DbError> {
    let query_span = tracing::info_span!("Fetch astronomical objects.");
    with_lease(db, "fetch astronomical objects", |conn| {
        Box::pin(async move {
            sqlx::query_as::<_, models::AstronomicalObject>(
                r#"
                SELECT
                    AstronomicalName AS name,
                    DistanceFromEarth AS distance,
                    Universe AS universe
                FROM AstronomicalObject
                "#,
            )
            .fetch_all(&mut **conn)
            .await
            .map_err(DbError::from)
        })
    })
    .instrument(query_span)
    .await
}
