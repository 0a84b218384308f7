use super::schema::{self, Table};
use super::{with_lease, Database, DbError};
use crate::models;
use sqlx::Row;
use tracing::Instrument;

/// Columns a caller may project from the Universe table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniverseColumn {
    Name,
    Age,
    Rate,
}

impl UniverseColumn {
    pub fn column(self) -> &'static str {
        match self {
            UniverseColumn::Name => "UniversalName",
            UniverseColumn::Age => "Age",
            UniverseColumn::Rate => "ExpansionaryRate",
        }
    }
}

impl std::str::FromStr for UniverseColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UNIVERSALNAME" => Ok(UniverseColumn::Name),
            "AGE" => Ok(UniverseColumn::Age),
            "EXPANSIONARYRATE" => Ok(UniverseColumn::Rate),
            other => Err(format!("unknown universe column {:?}", other)),
        }
    }
}

pub async fn initiate(db: &Database) -> Result<(), DbError> {
    schema::reset(db, Table::Universe).await
}

pub async fn insert(db: &Database, universe: models::Universe) -> Result<(), DbError> {
    let query_span = tracing::info_span!("Saving new universe into the database");
    with_lease(db, "insert universe", move |conn| {
        Box::pin(async move {
            let result = sqlx::query(
                "INSERT INTO Universe (UniversalName, Age, ExpansionaryRate) VALUES ($1, $2, $3)",
            )
            .bind(&universe.name)
            .bind(universe.age)
            .bind(universe.rate)
            .execute(&mut **conn)
            .await?;
            DbError::check_affected(result.rows_affected())
        })
    })
    .instrument(query_span)
    .await
}

pub async fn fetch_all(db: &Database) -> Result<Vec<models::Universe>, DbError> {
    let query_span = tracing::info_span!("Fetch universes.");
    with_lease(db, "fetch universes", |conn| {
        Box::pin(async move {
            sqlx::query_as::<_, models::Universe>(
                "SELECT UniversalName AS name, Age AS age, ExpansionaryRate AS rate FROM Universe",
            )
            .fetch_all(&mut **conn)
            .await
            .map_err(DbError::from)
        })
    })
    .instrument(query_span)
    .await
}

pub async fn fetch_names(db: &Database) -> Result<Vec<String>, DbError> {
    let query_span = tracing::info_span!("Fetch universe names.");
    with_lease(db, "fetch universe names", |conn| {
        Box::pin(async move {
            sqlx::query_scalar::<_, String>("SELECT UniversalName FROM Universe")
                .fetch_all(&mut **conn)
                .await
                .map_err(DbError::from)
        })
    })
    .instrument(query_span)
    .await
}

/// Selects only `columns`, in the given order. Cells come back as JSON values.
pub async fn project(
    db: &Database,
    columns: Vec<UniverseColumn>,
) -> Result<Vec<Vec<serde_json::Value>>, DbError> {
    let query_span = tracing::info_span!("Project universe columns.", ?columns);
    let select = columns
        .iter()
        .map(|c| c.column())
        .collect::<Vec<_>>()
        .join(", ");
    let statement = format!("SELECT {} FROM Universe", select);

    with_lease(db, "project universes", move |conn| {
        Box::pin(async move {
            let rows = sqlx::query(&statement)
                .fetch_all(&mut **conn)
                .await
                .map_err(DbError::from)?;
            rows.iter()
                .map(|row| {
                    columns
                        .iter()
                        .enumerate()
                        .map(|(i, column)| {
                            let value = match column {
                                UniverseColumn::Name => serde_json::Value::from(
                                    row.try_get::<Option<String>, _>(i)?,
                                ),
                                UniverseColumn::Age | UniverseColumn::Rate => {
                                    serde_json::Value::from(row.try_get::<Option<f64>, _>(i)?)
                                }
                            };
                            Ok::<_, DbError>(value)
                        })
                        .collect::<Result<Vec<_>, DbError>>()
                })
                .collect::<Result<Vec<_>, DbError>>()
        })
    })
    .instrument(query_span)
    .await
}

pub async fn count(db: &Database) -> Result<i64, DbError> {
    let query_span = tracing::info_span!("Count universes.");
    with_lease(db, "count universes", |conn| {
        Box::pin(async move {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Universe")
                .fetch_one(&mut **conn)
                .await
                .map_err(DbError::from)
        })
    })
    .instrument(query_span)
    .await
}

/// Deleting a universe takes its astronomical objects (and their galaxies and stars) with it.
#[tracing::instrument(name = "Delete universe.", skip(db))]
pub async fn delete(db: &Database, name: String) -> Result<(), DbError> {
    with_lease(db, "delete universe", move |conn| {
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM Universe WHERE UniversalName = $1")
                .bind(&name)
                .execute(&mut **conn)
                .await?;
            DbError::check_affected(result.rows_affected())
        })
    })
    .await
}
