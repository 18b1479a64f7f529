use crate::{
    abstract_trait::product::{
        repository::{DynProductQueryRepository, DynSchemaRepository},
        service::{DynHealthService, DynProductQueryService},
    },
    repository::{query::ProductQueryRepository, schema::SchemaRepository},
    service::{
        bootstrap::SchemaBootstrap, health::HealthService, primary_key::PrimaryKeyResolver,
        query::ProductQueryService,
    },
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub health: DynHealthService,
    pub bootstrap: Arc<SchemaBootstrap>,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("health", &"HealthService")
            .field("bootstrap", &"SchemaBootstrap")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub product_query_repo: DynProductQueryRepository,
    pub schema_repo: DynSchemaRepository,
}

impl DependenciesInjectDeps {
    pub fn from_pool(pool: ConnectionPool) -> Self {
        Self {
            product_query_repo: Arc::new(ProductQueryRepository::new(pool.clone())),
            schema_repo: Arc::new(SchemaRepository::new(pool)),
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            product_query_repo,
            schema_repo,
        } = deps;

        let primary_key = Arc::new(PrimaryKeyResolver::new(schema_repo.clone()));

        let product_query: DynProductQueryService = Arc::new(ProductQueryService::new(
            product_query_repo,
            primary_key.clone(),
            registry,
        ));

        let health: DynHealthService = Arc::new(HealthService::new(schema_repo.clone()));

        let bootstrap = Arc::new(SchemaBootstrap::new(schema_repo, primary_key));

        Self {
            product_query,
            health,
            bootstrap,
        }
    }
}
