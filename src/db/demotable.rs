//! Rename against the legacy `ZUBAT` table (folded to `zubat`), which no
//! `initiate-*` call creates. Without it the statement fails and the caller
//! gets `DbError::Execute`.

use super::{with_lease, Database, DbError};

#[tracing::instrument(name = "Rename demotable entry.", skip(db))]
pub async fn rename(db: &Database, old_name: String, new_name: String) -> Result<(), DbError> {
    with_lease(db, "rename demotable entry", move |conn| {
        Box::pin(async move {
            let result = sqlx::query("UPDATE ZUBAT SET name = $1 WHERE name = $2")
                .bind(&new_name)
                .bind(&old_name)
                .execute(&mut **conn)
                .await?;
            DbError::check_affected(result.rows_affected())
        })
    })
    .await
}
