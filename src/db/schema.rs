//! Table definitions and the destructive reset used by the `initiate-*` endpoints.

use super::{with_lease, Database, DbError};
use sqlx::PgConnection;
use tracing::Instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Universe,
    AstronomicalObject,
    Galaxy,
    Star,
}

impl Table {
    pub fn name(self) -> &'static str {
        match self {
            Table::Universe => "Universe",
            Table::AstronomicalObject => "AstronomicalObject",
            Table::Galaxy => "Galaxy",
            Table::Star => "Star",
        }
    }

    /// Tables holding a foreign key into this one.
    pub fn dependents(self) -> &'static [Table] {
        match self {
            Table::Universe => &[Table::AstronomicalObject],
            Table::AstronomicalObject => &[Table::Star, Table::Galaxy],
            Table::Galaxy | Table::Star => &[],
        }
    }

    /// Every table that must be gone before this one can be dropped,
    /// deepest dependents first, ending with `self`.
    pub fn drop_order(self) -> Vec<Table> {
        let mut order = Vec::new();
        self.collect_drop_order(&mut order);
        order
    }

    fn collect_drop_order(self, order: &mut Vec<Table>) {
        for dependent in self.dependents() {
            dependent.collect_drop_order(order);
        }
        if !order.contains(&self) {
            order.push(self);
        }
    }

    pub fn create_statement(self) -> &'static str {
        match self {
            Table::Universe => {
                r#"
                CREATE TABLE Universe (
                    UniversalName VARCHAR(50),
                    Age DOUBLE PRECISION,
                    ExpansionaryRate DOUBLE PRECISION,
                    PRIMARY KEY (UniversalName)
                )
                "#
            }
            Table::AstronomicalObject => {
                r#"
                CREATE TABLE AstronomicalObject (
                    AstronomicalName VARCHAR(50),
                    DistanceFromEarth DOUBLE PRECISION,
                    Universe VARCHAR(50) NOT NULL,
                    PRIMARY KEY (AstronomicalName),
                    FOREIGN KEY (Universe) REFERENCES Universe(UniversalName) ON DELETE CASCADE
                )
                "#
            }
            Table::Galaxy => {
                r#"
                CREATE TABLE Galaxy (
                    GalacticName VARCHAR(50),
                    Constellation VARCHAR(50),
                    VariationType VARCHAR(50),
                    Radius DOUBLE PRECISION,
                    StarCount VARCHAR(50),
                    CentralObject VARCHAR(50),
                    PRIMARY KEY (GalacticName),
                    FOREIGN KEY (GalacticName) REFERENCES AstronomicalObject(AstronomicalName) ON DELETE CASCADE
                )
                "#
            }
            Table::Star => {
                r#"
                CREATE TABLE Star (
                    SolarName VARCHAR(50),
                    Luminosity DOUBLE PRECISION,
                    SpectralClass VARCHAR(50),
                    PRIMARY KEY (SolarName),
                    FOREIGN KEY (SolarName) REFERENCES AstronomicalObject(AstronomicalName) ON DELETE CASCADE
                )
                "#
            }
        }
    }
}

/// Drops `table` if it exists. Idempotent.
pub async fn ensure_absent(conn: &mut PgConnection, table: Table) -> Result<(), sqlx::Error> {
    let statement = format!("DROP TABLE IF EXISTS {}", table.name());
    sqlx::query(&statement).execute(conn).await?;
    Ok(())
}

/// Drops `table` together with everything that references it, then recreates `table`.
pub async fn reset(db: &Database, table: Table) -> Result<(), DbError> {
    let query_span = tracing::info_span!("Reset table", table = table.name());
    with_lease(db, "reset table", move |conn| {
        Box::pin(async move {
            for absent in table.drop_order() {
                ensure_absent(&mut **conn, absent).await?;
            }
            sqlx::query(table.create_statement()).execute(&mut **conn).await?;
            tracing::info!("Table {} created", table.name());
            Ok::<(), DbError>(())
        })
    })
    .instrument(query_span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependents_are_dropped_first() {
        assert_eq!(
            Table::Universe.drop_order(),
            vec![
                Table::Star,
                Table::Galaxy,
                Table::AstronomicalObject,
                Table::Universe
            ]
        );
        assert_eq!(
            Table::AstronomicalObject.drop_order(),
            vec![Table::Star, Table::Galaxy, Table::AstronomicalObject]
        );
        assert_eq!(Table::Galaxy.drop_order(), vec![Table::Galaxy]);
        assert_eq!(Table::Star.drop_order(), vec![Table::Star]);
    }

    #[test]
    fn create_statements_name_their_table() {
        for table in [
            Table::Universe,
            Table::AstronomicalObject,
            Table::Galaxy,
            Table::Star,
        ] {
            let ddl = table.create_statement();
            assert!(ddl.contains(&format!("CREATE TABLE {} (", table.name())));
        }
    }

    #[test]
    fn child_tables_cascade() {
        assert!(Table::AstronomicalObject
            .create_statement()
            .contains("REFERENCES Universe(UniversalName) ON DELETE CASCADE"));
        assert!(Table::Galaxy
            .create_statement()
            .contains("REFERENCES AstronomicalObject(AstronomicalName) ON DELETE CASCADE"));
        assert!(!Table::Universe.create_statement().contains("REFERENCES"));
    }
}
