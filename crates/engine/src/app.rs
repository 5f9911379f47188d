//! Application state and composition.

use crate::infrastructure::sqlite::SqliteRepositories;
use crate::use_cases;

/// Main application state.
///
/// Holds every use case, wired to the repositories it was built from.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub creature: use_cases::CreatureCrud,
    pub realm: use_cases::RealmCrud,
    pub membership: use_cases::MembershipUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repos: SqliteRepositories) -> Self {
        let SqliteRepositories {
            creature,
            realm,
            membership,
        } = repos;

        let use_cases = UseCases {
            creature: use_cases::CreatureCrud::new(creature.clone(), membership.clone()),
            realm: use_cases::RealmCrud::new(realm.clone(), membership.clone()),
            membership: use_cases::MembershipUseCases::new(creature, realm, membership),
        };

        Self { use_cases }
    }
}
