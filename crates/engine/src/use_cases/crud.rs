//! Generic lookup and mutation helpers shared by every entity type.
//!
//! Written once against [`Entity`] and [`EntityRepo`]; each entity's use
//! cases instantiate them with their concrete type.

use mythos_domain::{Entity, Page};

use super::CrudError;
use crate::infrastructure::ports::EntityRepo;

/// Check that `raw` is a well-formed identifier for `T`.
pub fn validate_id<T: Entity>(raw: &str) -> Result<T::Id, CrudError> {
    raw.parse::<T::Id>().map_err(CrudError::from)
}

/// Load an entity by an already validated id.
pub async fn fetch_by_id<T: Entity>(
    repo: &dyn EntityRepo<T>,
    id: T::Id,
) -> Result<T, CrudError> {
    repo.get(id)
        .await?
        .ok_or_else(|| CrudError::not_found::<T>(id))
}

/// Validate `raw_id`, then load the entity.
///
/// A malformed id is `InvalidIdentifier` and never reaches the store; a
/// well-formed but unknown id is `NotFound`.
pub async fn fetch_or_fail<T: Entity>(
    repo: &dyn EntityRepo<T>,
    raw_id: &str,
) -> Result<T, CrudError> {
    let id = validate_id::<T>(raw_id)?;
    fetch_by_id(repo, id).await
}

/// Entities in store insertion order, windowed by `page`.
pub async fn paginated_list<T: Entity>(
    repo: &dyn EntityRepo<T>,
    page: Page,
) -> Result<Vec<T>, CrudError> {
    Ok(repo.list(page).await?)
}

/// Fetch the entity (validating its id), then delete it with its memberships.
pub async fn remove<T: Entity>(repo: &dyn EntityRepo<T>, raw_id: &str) -> Result<(), CrudError> {
    let entity = fetch_or_fail(repo, raw_id).await?;
    repo.delete(entity.id()).await?;
    Ok(())
}
