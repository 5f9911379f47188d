//! SQLite realm repository.

use async_trait::async_trait;
use mythos_domain::{Page, Realm, RealmId};
use sqlx::SqlitePool;

use super::rows;
use crate::infrastructure::ports::{EntityRepo, RepoError};

pub struct SqliteRealmRepo {
    pool: SqlitePool,
}

impl SqliteRealmRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityRepo<Realm> for SqliteRealmRepo {
    async fn insert(&self, realm: &Realm) -> Result<(), RepoError> {
        sqlx::query("INSERT INTO realms (id, name) VALUES (?, ?)")
            .bind(realm.id().to_string())
            .bind(realm.name().as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("realms.insert", e))?;
        Ok(())
    }

    async fn get(&self, id: RealmId) -> Result<Option<Realm>, RepoError> {
        let row = sqlx::query("SELECT id, name FROM realms WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("realms.get", e))?;

        row.as_ref().map(rows::realm).transpose()
    }

    async fn list(&self, page: Page) -> Result<Vec<Realm>, RepoError> {
        let records = sqlx::query("SELECT id, name FROM realms ORDER BY seq LIMIT ? OFFSET ?")
            .bind(page.limit_i64())
            .bind(page.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("realms.list", e))?;

        records.iter().map(rows::realm).collect()
    }

    async fn update(&self, realm: &Realm) -> Result<(), RepoError> {
        let result = sqlx::query("UPDATE realms SET name = ? WHERE id = ?")
            .bind(realm.name().as_str())
            .bind(realm.id().to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("realms.update", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Realm", realm.id()));
        }
        Ok(())
    }

    async fn delete(&self, id: RealmId) -> Result<(), RepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("realms.delete", e))?;

        sqlx::query("DELETE FROM memberships WHERE realm_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("realms.delete", e))?;

        let result = sqlx::query("DELETE FROM realms WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("realms.delete", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Realm", id));
        }

        tx.commit()
            .await
            .map_err(|e| RepoError::database("realms.delete", e))?;
        Ok(())
    }
}
