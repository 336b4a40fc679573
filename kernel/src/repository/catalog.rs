use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::catalog::{
    event::{
        CreatePackage, CreateService, DeletePackage, DeleteService, UpdatePackage,
        UpdateService,
    },
    Package, Service,
};
use crate::model::id::{PackageId, ServiceId};

/// Read side feeds the pricing engine with catalog snapshots; write side is
/// the admin CRUD surface.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn create_service(&self, event: CreateService) -> AppResult<ServiceId>;
    /// Inserts a whole menu batch atomically; a failure on any row leaves
    /// nothing written.
    async fn create_services(&self, events: Vec<CreateService>) -> AppResult<u32>;
    async fn find_all_services(&self) -> AppResult<Vec<Service>>;
    async fn find_service_by_id(&self, service_id: ServiceId) -> AppResult<Option<Service>>;
    async fn find_services_by_ids(&self, service_ids: &[ServiceId]) -> AppResult<Vec<Service>>;
    async fn update_service(&self, event: UpdateService) -> AppResult<()>;
    async fn delete_service(&self, event: DeleteService) -> AppResult<()>;

    async fn create_package(&self, event: CreatePackage) -> AppResult<PackageId>;
    async fn find_all_packages(&self) -> AppResult<Vec<Package>>;
    async fn find_package_by_id(&self, package_id: PackageId) -> AppResult<Option<Package>>;
    async fn update_package(&self, event: UpdatePackage) -> AppResult<()>;
    async fn delete_package(&self, event: DeletePackage) -> AppResult<()>;
}
