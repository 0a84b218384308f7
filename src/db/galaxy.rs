use super::schema::{self, Table};
use super::{with_lease, Database, DbError};
use crate::models;
use tracing::Instrument;

pub async fn initiate(db: &Database) -> Result<(), DbError> {
    schema::reset(db, Table::Galaxy).await
}

/// The galaxy's name must already exist as an astronomical object.
pub async fn insert(db: &Database, galaxy: models::Galaxy) -> Result<(), DbError> {
    let query_span = tracing::info_span!("Saving new galaxy into the database");
    with_lease(db, "insert galaxy", move |conn| {
        Box::pin(async move {
            let result = sqlx::query(
                r#"
                INSERT INTO Galaxy (
                    GalacticName,
                    Constellation,
                    VariationType,
                    Radius,
                    StarCount,
                    CentralObject
                )
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(&galaxy.name)
            .bind(&galaxy.constellation)
            .bind(&galaxy.variation_type)
            .bind(galaxy.radius)
            .bind(&galaxy.star_count)
            .bind(&galaxy.central_object)
            .execute(&mut **conn)
            .await?;
            DbError::check_affected(result.rows_affected())
        })
    })
    .instrument(query_span)
    .await
}

/// Galaxies with the universe and distance of their astronomical object.
pub async fn fetch_all(db: &Database) -> Result<Vec<models::GalaxyListing>, DbError> {
    let query_span = tracing::info_span!("Fetch galaxies.");
    with_lease(db, "fetch galaxies", |conn| {
        Box::pin(async move {
            sqlx::query_as::<_, models::GalaxyListing>(
                r#"
                SELECT
                    g.GalacticName AS name,
                    o.Universe AS universe,
                    g.Constellation AS constellation,
                    g.VariationType AS variation_type,
                    g.Radius AS radius,
                    g.StarCount AS star_count,
                    g.CentralObject AS central_object,
                    o.DistanceFromEarth AS distance
                FROM Galaxy g
                JOIN AstronomicalObject o ON g.GalacticName = o.AstronomicalName
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
