//! Shared helpers for unit and end-to-end tests.

use async_trait::async_trait;
use mythos_domain::{
    Creature, CreatureId, CreatureName, Page, Realm, RealmId, RealmName, Species,
};
use sqlx::SqlitePool;

use crate::infrastructure::ports::{EntityRepo, RepoError};
use crate::infrastructure::sqlite;

/// A fresh in-memory database with the schema in place.
pub async fn memory_pool() -> SqlitePool {
    let pool = sqlite::connect("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    sqlite::ensure_schema(&pool).await.expect("schema");
    pool
}

pub fn creature(name: &str, species: &str) -> Creature {
    Creature::new(
        CreatureName::new(name),
        Species::new(species),
    )
}

pub fn realm(name: &str) -> Realm {
    Realm::new(RealmName::new(name))
}

mockall::mock! {
    pub CreatureRepo {}

    #[async_trait]
    impl EntityRepo<Creature> for CreatureRepo {
        async fn insert(&self, entity: &Creature) -> Result<(), RepoError>;
        async fn get(&self, id: CreatureId) -> Result<Option<Creature>, RepoError>;
        async fn list(&self, page: Page) -> Result<Vec<Creature>, RepoError>;
        async fn update(&self, entity: &Creature) -> Result<(), RepoError>;
        async fn delete(&self, id: CreatureId) -> Result<(), RepoError>;
    }
}

mockall::mock! {
    pub RealmRepo {}

    #[async_trait]
    impl EntityRepo<Realm> for RealmRepo {
        async fn insert(&self, entity: &Realm) -> Result<(), RepoError>;
        async fn get(&self, id: RealmId) -> Result<Option<Realm>, RepoError>;
        async fn list(&self, page: Page) -> Result<Vec<Realm>, RepoError>;
        async fn update(&self, entity: &Realm) -> Result<(), RepoError>;
        async fn delete(&self, id: RealmId) -> Result<(), RepoError>;
    }
}
