use std::sync::Arc;

mod domain;
mod infrastructure;
mod interfaces;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::{auth, db};
pub use interfaces::{graphql, handlers, middlewares, repositories, routes};

use repositories::{
    contact::ContactRepository, me::MeRepository, pricing::PricingRepository,
    project::ProjectRepository, skill::SkillRepository, sqlx_repo::SqlxRepo,
};
use use_cases::{
    auth::AuthHandler, contact::ContactHandler, me::MeHandler, pricing::PricingHandler,
    project::ProjectHandler, skill::SkillHandler,
};

pub type DynMeRepo = Arc<dyn MeRepository>;
pub type DynProjectRepo = Arc<dyn ProjectRepository>;
pub type DynSkillRepo = Arc<dyn SkillRepository>;
pub type DynPricingRepo = Arc<dyn PricingRepository>;
pub type DynContactRepo = Arc<dyn ContactRepository>;

pub struct AppState {
    pub me_handler: MeHandler<DynMeRepo>,
    pub project_handler: ProjectHandler<DynProjectRepo>,
    pub skill_handler: SkillHandler<DynSkillRepo>,
    pub pricing_handler: PricingHandler<DynPricingRepo>,
    pub contact_handler: ContactHandler<DynContactRepo>,
    pub auth_handler: AuthHandler,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        Self::with_store(config, Arc::new(SqlxRepo::new(pool)))
    }

    /// Wires every entity operation over one store implementation.
    /// Production uses the Postgres store; tests inject their own.
    pub fn with_store<S>(config: &settings::AppConfig, store: Arc<S>) -> Self
    where
        S: MeRepository
            + ProjectRepository
            + SkillRepository
            + PricingRepository
            + ContactRepository
            + 'static,
    {
        AppState {
            me_handler: MeHandler::new(store.clone() as DynMeRepo),
            project_handler: ProjectHandler::new(store.clone() as DynProjectRepo),
            skill_handler: SkillHandler::new(store.clone() as DynSkillRepo),
            pricing_handler: PricingHandler::new(store.clone() as DynPricingRepo),
            contact_handler: ContactHandler::new(store as DynContactRepo),
            auth_handler: AuthHandler::new(config),
        }
    }
}
