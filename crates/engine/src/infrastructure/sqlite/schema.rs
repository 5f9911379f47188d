//! Idempotent table creation.
//!
//! Every table carries an explicit `seq` key. Listings order by it, so
//! insertion order survives `VACUUM`.

use sqlx::SqlitePool;

use crate::infrastructure::ports::RepoError;

const STATEMENTS: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS creatures (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        id TEXT NOT NULL UNIQUE,
        name TEXT NOT NULL,
        species TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS realms (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        id TEXT NOT NULL UNIQUE,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS memberships (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        creature_id TEXT NOT NULL REFERENCES creatures(id) ON DELETE CASCADE,
        realm_id TEXT NOT NULL REFERENCES realms(id) ON DELETE CASCADE,
        UNIQUE (creature_id, realm_id)
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_memberships_realm
    ON memberships(realm_id)
    "#,
];

/// Create the creature, realm and membership tables if they do not exist.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), RepoError> {
    for statement in STATEMENTS {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| RepoError::database("ensure_schema", e))?;
    }
    tracing::debug!("SQLite schema ensured");
    Ok(())
}
