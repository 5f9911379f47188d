//! Row decoding shared by the SQLite repositories.

use mythos_domain::{Creature, CreatureId, CreatureName, Realm, RealmId, RealmName, Species};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use crate::infrastructure::ports::RepoError;

fn text(row: &SqliteRow, column: &str) -> Result<String, RepoError> {
    row.try_get(column)
        .map_err(|e| RepoError::serialization(format!("column {column}: {e}")))
}

pub(super) fn uuid(row: &SqliteRow, column: &str) -> Result<Uuid, RepoError> {
    let raw = text(row, column)?;
    Uuid::try_parse(&raw)
        .map_err(|e| RepoError::serialization(format!("column {column} holds {raw:?}: {e}")))
}

pub(super) fn creature(row: &SqliteRow) -> Result<Creature, RepoError> {
    let id = CreatureId::from_uuid(uuid(row, "id")?);
    let name = CreatureName::new(text(row, "name")?);
    let species = Species::new(text(row, "species")?);
    Ok(Creature::from_parts(id, name, species))
}

pub(super) fn realm(row: &SqliteRow) -> Result<Realm, RepoError> {
    let id = RealmId::from_uuid(uuid(row, "id")?);
    let name = RealmName::new(text(row, "name")?);
    Ok(Realm::from_parts(id, name))
}
