//! SQLite creature repository.

use async_trait::async_trait;
use mythos_domain::{Creature, CreatureId, Page};
use sqlx::SqlitePool;

use super::rows;
use crate::infrastructure::ports::{EntityRepo, RepoError};

pub struct SqliteCreatureRepo {
    pool: SqlitePool,
}

impl SqliteCreatureRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepo<Creature> for SqliteCreatureRepo {
    async fn insert(&self, creature: &Creature) -> Result<(), RepoError> {
        sqlx::query("INSERT INTO creatures (id, name, species) VALUES (?, ?, ?)")
            .bind(creature.id().to_string())
            .bind(creature.name().as_str())
            .bind(creature.species().as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("creatures.insert", e))?;
        Ok(())
    }

    async fn get(&self, id: CreatureId) -> Result<Option<Creature>, RepoError> {
        let row = sqlx::query("SELECT id, name, species FROM creatures WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("creatures.get", e))?;

        row.as_ref().map(rows::creature).transpose()
    }

    async fn list(&self, page: Page) -> Result<Vec<Creature>, RepoError> {
        let records = sqlx::query(
            "SELECT id, name, species FROM creatures ORDER BY seq LIMIT ? OFFSET ?",
        )
        .bind(page.limit_i64())
        .bind(page.offset_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("creatures.list", e))?;

        records.iter().map(rows::creature).collect()
    }

    async fn update(&self, creature: &Creature) -> Result<(), RepoError> {
        let result = sqlx::query("UPDATE creatures SET name = ?, species = ? WHERE id = ?")
            .bind(creature.name().as_str())
            .bind(creature.species().as_str())
            .bind(creature.id().to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("creatures.update", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Creature", creature.id()));
        }
        Ok(())
    }

    async fn delete(&self, id: CreatureId) -> Result<(), RepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("creatures.delete", e))?;

        sqlx::query("DELETE FROM memberships WHERE creature_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("creatures.delete", e))?;

        let result = sqlx::query("DELETE FROM creatures WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("creatures.delete", e))?;

        // Dropping the transaction rolls it back.
        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Creature", id));
        }

        tx.commit()
            .await
            .map_err(|e| RepoError::database("creatures.delete", e))?;
        Ok(())
    }
}
