//! HTTP routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use mythos_domain::{Creature, CreatureId, CreatureName, Page, Realm, RealmId, RealmName, Species};

use super::extract::{ApiJson, ApiQuery};
use crate::app::App;
use crate::use_cases::{CreatureWithRealms, CrudError, RealmWithCreatures};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        .route("/creatures/", get(list_creatures).post(create_creature))
        .route(
            "/creatures/{creature_id}",
            get(get_creature).put(update_creature).delete(delete_creature),
        )
        .route("/realms/", get(list_realms).post(create_realm))
        .route(
            "/realms/{realm_id}",
            get(get_realm).put(update_realm).delete(delete_realm),
        )
        .route("/realms/{realm_id}/creatures/", get(list_realm_creatures))
        .route(
            "/memberships/",
            post(create_membership).delete(delete_membership),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Request / response bodies
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct CreatureCreate {
    pub name: String,
    pub species: String,
}

#[derive(Debug, Deserialize)]
pub struct RealmCreate {
    pub name: String,
}

/// Identifiers arrive as raw strings so that malformed ones surface as 400,
/// not as a body deserialization failure.
#[derive(Debug, Deserialize)]
pub struct MembershipCreate {
    pub creature_id: String,
    pub realm_id: String,
}

#[derive(Debug, Deserialize)]
pub struct MembershipQuery {
    pub creature_id: String,
    pub realm_id: String,
}

#[derive(Debug, Serialize)]
pub struct CreatureSimple {
    pub id: CreatureId,
    pub name: CreatureName,
    pub species: Species,
}

#[derive(Debug, Serialize)]
pub struct RealmSimple {
    pub id: RealmId,
    pub name: RealmName,
}

/// Creature with its realms, one level deep.
#[derive(Debug, Serialize)]
pub struct CreatureOut {
    pub id: CreatureId,
    pub name: CreatureName,
    pub species: Species,
    pub realms: Vec<RealmSimple>,
}

/// Realm with its creatures, one level deep.
#[derive(Debug, Serialize)]
pub struct RealmOut {
    pub id: RealmId,
    pub name: RealmName,
    pub creatures: Vec<CreatureSimple>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Detail {
    pub detail: String,
}

impl From<&Creature> for CreatureSimple {
    fn from(creature: &Creature) -> Self {
        Self {
            id: creature.id(),
            name: creature.name().clone(),
            species: creature.species().clone(),
        }
    }
}

impl From<&Realm> for RealmSimple {
    fn from(realm: &Realm) -> Self {
        Self {
            id: realm.id(),
            name: realm.name().clone(),
        }
    }
}

impl From<CreatureWithRealms> for CreatureOut {
    fn from(value: CreatureWithRealms) -> Self {
        let CreatureWithRealms { creature, realms } = value;
        Self {
            id: creature.id(),
            name: creature.name().clone(),
            species: creature.species().clone(),
            realms: realms.iter().map(RealmSimple::from).collect(),
        }
    }
}

impl From<RealmWithCreatures> for RealmOut {
    fn from(value: RealmWithCreatures) -> Self {
        let RealmWithCreatures { realm, creatures } = value;
        Self {
            id: realm.id(),
            name: realm.name().clone(),
            creatures: creatures.iter().map(CreatureSimple::from).collect(),
        }
    }
}

// =============================================================================
// Creatures
// =============================================================================

async fn create_creature(
    State(app): State<Arc<App>>,
    ApiJson(body): ApiJson<CreatureCreate>,
) -> Result<Json<CreatureSimple>, ApiError> {
    let creature = app
        .use_cases
        .creature
        .create(body.name, body.species)
        .await?;
    Ok(Json(CreatureSimple::from(&creature)))
}

async fn list_creatures(
    State(app): State<Arc<App>>,
    ApiQuery(page): ApiQuery<Page>,
) -> Result<Json<Vec<CreatureOut>>, ApiError> {
    let creatures = app.use_cases.creature.list(page).await?;
    Ok(Json(creatures.into_iter().map(CreatureOut::from).collect()))
}

async fn get_creature(
    State(app): State<Arc<App>>,
    Path(creature_id): Path<String>,
) -> Result<Json<CreatureOut>, ApiError> {
    let creature = app.use_cases.creature.get(&creature_id).await?;
    Ok(Json(creature.into()))
}

async fn update_creature(
    State(app): State<Arc<App>>,
    Path(creature_id): Path<String>,
    ApiJson(body): ApiJson<CreatureCreate>,
) -> Result<Json<CreatureSimple>, ApiError> {
    let creature = app
        .use_cases
        .creature
        .update(&creature_id, body.name, body.species)
        .await?;
    Ok(Json(CreatureSimple::from(&creature)))
}

async fn delete_creature(
    State(app): State<Arc<App>>,
    Path(creature_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    app.use_cases.creature.delete(&creature_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Realms
// =============================================================================

async fn create_realm(
    State(app): State<Arc<App>>,
    ApiJson(body): ApiJson<RealmCreate>,
) -> Result<Json<RealmSimple>, ApiError> {
    let realm = app.use_cases.realm.create(body.name).await?;
    Ok(Json(RealmSimple::from(&realm)))
}

async fn list_realms(
    State(app): State<Arc<App>>,
    ApiQuery(page): ApiQuery<Page>,
) -> Result<Json<Vec<RealmOut>>, ApiError> {
    let realms = app.use_cases.realm.list(page).await?;
    Ok(Json(realms.into_iter().map(RealmOut::from).collect()))
}

async fn get_realm(
    State(app): State<Arc<App>>,
    Path(realm_id): Path<String>,
) -> Result<Json<RealmOut>, ApiError> {
    let realm = app.use_cases.realm.get(&realm_id).await?;
    Ok(Json(realm.into()))
}

async fn update_realm(
    State(app): State<Arc<App>>,
    Path(realm_id): Path<String>,
    ApiJson(body): ApiJson<RealmCreate>,
) -> Result<Json<RealmSimple>, ApiError> {
    let realm = app.use_cases.realm.update(&realm_id, body.name).await?;
    Ok(Json(RealmSimple::from(&realm)))
}

async fn delete_realm(
    State(app): State<Arc<App>>,
    Path(realm_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    app.use_cases.realm.delete(&realm_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_realm_creatures(
    State(app): State<Arc<App>>,
    Path(realm_id): Path<String>,
    ApiQuery(page): ApiQuery<Page>,
) -> Result<Json<Vec<CreatureSimple>>, ApiError> {
    let creatures = app.use_cases.realm.list_creatures(&realm_id, page).await?;
    Ok(Json(creatures.iter().map(CreatureSimple::from).collect()))
}

// =============================================================================
// Memberships
// =============================================================================

async fn create_membership(
    State(app): State<Arc<App>>,
    ApiJson(body): ApiJson<MembershipCreate>,
) -> Result<(StatusCode, Json<Detail>), ApiError> {
    app.use_cases
        .membership
        .create(&body.creature_id, &body.realm_id)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(Detail {
            detail: "Membership created successfully".to_string(),
        }),
    ))
}

async fn delete_membership(
    State(app): State<Arc<App>>,
    ApiQuery(query): ApiQuery<MembershipQuery>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .membership
        .delete(&query.creature_id, &query.realm_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// An extractor refused the request before any handler ran.
    Rejected {
        status: StatusCode,
        detail: String,
    },
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Rejected { status, detail } => (status, detail),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };
        (status, Json(Detail { detail })).into_response()
    }
}

impl From<CrudError> for ApiError {
    fn from(e: CrudError) -> Self {
        let msg = e.to_string();
        match e {
            CrudError::InvalidIdentifier(_) | CrudError::DuplicateMembership => {
                ApiError::BadRequest(msg)
            }
            CrudError::NotFound { .. } | CrudError::MembershipNotFound => ApiError::NotFound(msg),
            CrudError::Repo(cause) => {
                tracing::error!(error = %cause, "Storage failure while handling request");
                ApiError::Internal(msg)
            }
        }
    }
}
