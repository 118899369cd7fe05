use std::sync::Arc;
use crate::catalog::dispatcher::OperationDispatcher;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::store::CatalogStore;
use crate::core::domain::Configuration;

pub fn create_catalog_service(store: Arc<CatalogStore>) -> Arc<dyn CatalogService> {
    Arc::new(CatalogServiceImpl::new(store))
}

// wires a freshly seeded catalog behind the SOAP dispatcher
pub fn create_dispatcher(config: &Configuration) -> OperationDispatcher {
    let store = Arc::new(CatalogStore::seeded(config.id_assignment));
    OperationDispatcher::new(create_catalog_service(store))
}
