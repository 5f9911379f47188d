//! SQLite membership repository.
//!
//! Memberships live in a join table unique on `(creature_id, realm_id)`. The
//! table's `seq` key records creation order, which every listing follows.

use std::collections::HashMap;

use async_trait::async_trait;
use mythos_domain::{Creature, CreatureId, Membership, Page, Realm, RealmId};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::{rows, BIND_CHUNK};
use crate::infrastructure::ports::{MembershipRepo, RepoError};

pub struct SqliteMembershipRepo {
    pool: SqlitePool,
}

impl SqliteMembershipRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Work out which side of a rejected insert is missing.
    async fn missing_side(&self, membership: Membership) -> RepoError {
        let creature_exists: Result<i64, _> =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM creatures WHERE id = ?)")
                .bind(membership.creature_id.to_string())
                .fetch_one(&self.pool)
                .await;

        match creature_exists {
            Ok(0) => RepoError::not_found("Creature", membership.creature_id),
            Ok(_) => RepoError::not_found("Realm", membership.realm_id),
            Err(e) => RepoError::database("memberships.insert", e),
        }
    }
}

enum InsertFailure {
    Duplicate,
    DanglingReference,
    Other(sqlx::Error),
}

fn classify(error: sqlx::Error) -> InsertFailure {
    if let sqlx::Error::Database(db) = &error {
        if db.is_unique_violation() {
            return InsertFailure::Duplicate;
        }
        if db.is_foreign_key_violation() {
            return InsertFailure::DanglingReference;
        }
    }
    InsertFailure::Other(error)
}

#[async_trait]
impl MembershipRepo for SqliteMembershipRepo {
    async fn exists(&self, membership: Membership) -> Result<bool, RepoError> {
        let found: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM memberships WHERE creature_id = ? AND realm_id = ?)",
        )
        .bind(membership.creature_id.to_string())
        .bind(membership.realm_id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::database("memberships.exists", e))?;

        Ok(found != 0)
    }

    async fn insert(&self, membership: Membership) -> Result<(), RepoError> {
        let result = sqlx::query("INSERT INTO memberships (creature_id, realm_id) VALUES (?, ?)")
            .bind(membership.creature_id.to_string())
            .bind(membership.realm_id.to_string())
            .execute(&self.pool)
            .await;

        match result.map_err(classify) {
            Ok(_) => Ok(()),
            Err(InsertFailure::Duplicate) => Err(RepoError::constraint(format!(
                "membership ({}, {}) already exists",
                membership.creature_id, membership.realm_id
            ))),
            Err(InsertFailure::DanglingReference) => Err(self.missing_side(membership).await),
            Err(InsertFailure::Other(e)) => Err(RepoError::database("memberships.insert", e)),
        }
    }

    async fn remove(&self, membership: Membership) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM memberships WHERE creature_id = ? AND realm_id = ?")
            .bind(membership.creature_id.to_string())
            .bind(membership.realm_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("memberships.remove", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn realms_of_creatures(
        &self,
        creature_ids: &[CreatureId],
    ) -> Result<HashMap<CreatureId, Vec<Realm>>, RepoError> {
        let mut realms: HashMap<CreatureId, Vec<Realm>> =
            creature_ids.iter().map(|id| (*id, Vec::new())).collect();

        for chunk in creature_ids.chunks(BIND_CHUNK) {
            let mut query = QueryBuilder::<Sqlite>::new(
                "SELECT m.creature_id AS owner_id, r.id AS id, r.name AS name \
                 FROM memberships m JOIN realms r ON r.id = m.realm_id \
                 WHERE m.creature_id IN (",
            );
            let mut ids = query.separated(", ");
            for id in chunk {
                ids.push_bind(id.to_string());
            }
            ids.push_unseparated(") ORDER BY m.seq");

            let records = query
                .build()
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepoError::database("memberships.realms_of_creatures", e))?;

            for record in &records {
                let owner = CreatureId::from_uuid(rows::uuid(record, "owner_id")?);
                realms.entry(owner).or_default().push(rows::realm(record)?);
            }
        }

        Ok(realms)
    }

    async fn creatures_of_realms(
        &self,
        realm_ids: &[RealmId],
    ) -> Result<HashMap<RealmId, Vec<Creature>>, RepoError> {
        let mut creatures: HashMap<RealmId, Vec<Creature>> =
            realm_ids.iter().map(|id| (*id, Vec::new())).collect();

        for chunk in realm_ids.chunks(BIND_CHUNK) {
            let mut query = QueryBuilder::<Sqlite>::new(
                "SELECT m.realm_id AS owner_id, c.id AS id, c.name AS name, c.species AS species \
                 FROM memberships m JOIN creatures c ON c.id = m.creature_id \
                 WHERE m.realm_id IN (",
            );
            let mut ids = query.separated(", ");
            for id in chunk {
                ids.push_bind(id.to_string());
            }
            ids.push_unseparated(") ORDER BY m.seq");

            let records = query
                .build()
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepoError::database("memberships.creatures_of_realms", e))?;

            for record in &records {
                let owner = RealmId::from_uuid(rows::uuid(record, "owner_id")?);
                creatures
                    .entry(owner)
                    .or_default()
                    .push(rows::creature(record)?);
            }
        }

        Ok(creatures)
    }

    async fn creatures_in(
        &self,
        realm_id: RealmId,
        page: Page,
    ) -> Result<Vec<Creature>, RepoError> {
        let records = sqlx::query(
            "SELECT c.id AS id, c.name AS name, c.species AS species \
             FROM memberships m JOIN creatures c ON c.id = m.creature_id \
             WHERE m.realm_id = ? ORDER BY m.seq LIMIT ? OFFSET ?",
        )
        .bind(realm_id.to_string())
        .bind(page.limit_i64())
        .bind(page.offset_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("memberships.creatures_in", e))?;

        records.iter().map(rows::creature).collect()
    }
}
