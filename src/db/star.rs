use super::schema::{self, Table};
use super::{with_lease, Database, DbError};
use crate::models;
use tracing::Instrument;

pub async fn initiate(db: &Database) -> Result<(), DbError> {
    schema::reset(db, Table::Star).await
}

pub async fn insert(db: &Database, star: models::Star) -> Result<(), DbError> {
    let query_span = tracing::info_span!("Saving new star into the database");
    with_lease(db, "insert star", move |conn| {
        Box::pin(async move {
            let result = sqlx::query(
                "INSERT INTO Star (SolarName, Luminosity, SpectralClass) VALUES ($1, $2, $3)",
            )
            .bind(&star.name)
            .bind(star.luminosity)
            .bind(&star.spectral_class)
            .execute(&mut **conn)
            .await?;
            DbError::check_affected(result.rows_affected())
        })
    })
    .instrument(query_span)
    .await
}

pub async fn fetch_all(db: &Database) -> Result<Vec<models::Star>, DbError> {
    let query_span = tracing::info_span!("Fetch stars.");
    with_lease(db, "fetch stars", |conn| {
        Box::pin(async move {
            sqlx::query_as::<_, models::Star>(
                r#"
                SELECT
                    SolarName AS name,
                    Luminosity AS luminosity,
                    SpectralClass AS spectral_class
                FROM Star
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

/// `DbError::NoRowsAffected` when no star has that name.
#[tracing::instrument(name = "Delete star.", skip(db))]
pub async fn delete(db: &Database, solar_name: String) -> Result<(), DbError> {
    with_lease(db, "delete star", move |conn| {
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM Star WHERE SolarName = $1")
                .bind(&solar_name)
                .execute(&mut **conn)
                .await?;
            DbError::check_affected(result.rows_affected())
        })
    })
    .await
}
