//! SQLite-backed storage for creatures, realms and their memberships.

mod creature_repo;
mod membership_repo;
mod realm_repo;
mod rows;
mod schema;

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::infrastructure::ports::RepoError;

pub use creature_repo::SqliteCreatureRepo;
pub use membership_repo::SqliteMembershipRepo;
pub use realm_repo::SqliteRealmRepo;
pub use schema::ensure_schema;

/// Maximum number of bind parameters used in one `IN (...)` list.
const BIND_CHUNK: usize = 500;

/// All SQLite repositories sharing one pool.
#[derive(Clone)]
pub struct SqliteRepositories {
    pub creature: Arc<SqliteCreatureRepo>,
    pub realm: Arc<SqliteRealmRepo>,
    pub membership: Arc<SqliteMembershipRepo>,
}

impl SqliteRepositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            creature: Arc::new(SqliteCreatureRepo::new(pool.clone())),
            realm: Arc::new(SqliteRealmRepo::new(pool.clone())),
            membership: Arc::new(SqliteMembershipRepo::new(pool)),
        }
    }
}

/// Open a connection pool with foreign keys enforced.
///
/// In-memory databases live only as long as their connection, so they get a
/// single connection that is never recycled.
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, RepoError> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(|e| RepoError::database("connect", e))?
        .foreign_keys(true);

    let pool_options = if is_in_memory(url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections.max(1))
    };

    pool_options
        .connect_with(options)
        .await
        .map_err(|e| RepoError::database("connect", e))
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
