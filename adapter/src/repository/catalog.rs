use async_trait::async_trait;
use derive_new::new;
use kernel::model::catalog::{
    event::{
        CreatePackage, CreateService, DeletePackage, DeleteService, UpdatePackage,
        UpdateService,
    },
    Package, Service,
};
use kernel::model::id::{PackageId, ServiceId};
use kernel::repository::catalog::CatalogRepository;
use shared::error::{AppError, AppResult};
use uuid::Uuid;

use crate::database::{
    model::catalog::{PackageRow, ServiceRow},
    ConnectionPool,
};

#[derive(new)]
pub struct CatalogRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn create_service(&self, event: CreateService) -> AppResult<ServiceId> {
        let service_id = ServiceId::new();
        sqlx::query(
            r#"
                INSERT INTO services (service_id, name, description, category, unit_price, pricing_model)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(service_id.raw())
        .bind(&event.name)
        .bind(&event.description)
        .bind(&event.category)
        .bind(event.unit_price)
        .bind(event.pricing_model.to_string())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(service_id)
    }

    async fn create_services(&self, events: Vec<CreateService>) -> AppResult<u32> {
        // One transaction for the whole batch; a bad row rolls everything back.
        let mut tx = self.db.begin().await?;

        let mut created = 0;
        for event in events {
            let service_id = ServiceId::new();
            sqlx::query(
                r#"
                    INSERT INTO services (service_id, name, description, category, unit_price, pricing_model)
                    VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(service_id.raw())
            .bind(&event.name)
            .bind(&event.description)
            .bind(&event.category)
            .bind(event.unit_price)
            .bind(event.pricing_model.to_string())
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
            created += 1;
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(created)
    }

    async fn find_all_services(&self) -> AppResult<Vec<Service>> {
        let rows: Vec<ServiceRow> = sqlx::query_as(
            r#"
                SELECT service_id, name, description, category, unit_price, pricing_model
                FROM services
                ORDER BY category ASC, name ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Service::try_from).collect()
    }

    async fn find_service_by_id(&self, service_id: ServiceId) -> AppResult<Option<Service>> {
        let row: Option<ServiceRow> = sqlx::query_as(
            r#"
                SELECT service_id, name, description, category, unit_price, pricing_model
                FROM services
                WHERE service_id = $1
            "#,
        )
        .bind(service_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Service::try_from).transpose()
    }

    async fn find_services_by_ids(&self, service_ids: &[ServiceId]) -> AppResult<Vec<Service>> {
        if service_ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw_ids: Vec<Uuid> = service_ids.iter().map(|id| id.raw()).collect();
        let rows: Vec<ServiceRow> = sqlx::query_as(
            r#"
                SELECT service_id, name, description, category, unit_price, pricing_model
                FROM services
                WHERE service_id = ANY($1)
            "#,
        )
        .bind(&raw_ids)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Service::try_from).collect()
    }

    async fn update_service(&self, event: UpdateService) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE services
                SET name = COALESCE($2, name),
                    description = COALESCE($3, description),
                    category = COALESCE($4, category),
                    unit_price = COALESCE($5, unit_price),
                    pricing_model = COALESCE($6, pricing_model)
                WHERE service_id = $1
            "#,
        )
        .bind(event.service_id.raw())
        .bind(event.name)
        .bind(event.description)
        .bind(event.category)
        .bind(event.unit_price)
        .bind(event.pricing_model.map(|m| m.to_string()))
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified service not found".into()));
        }

        Ok(())
    }

    async fn delete_service(&self, event: DeleteService) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM services WHERE service_id = $1")
            .bind(event.service_id.raw())
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified service not found".into()));
        }

        Ok(())
    }

    async fn create_package(&self, event: CreatePackage) -> AppResult<PackageId> {
        let package_id = PackageId::new();
        let included: Vec<Uuid> = event.included_services.iter().map(|id| id.raw()).collect();
        let applicable: Option<Vec<Uuid>> = event
            .applicable_spaces
            .map(|spaces| spaces.iter().map(|id| id.raw()).collect());
        sqlx::query(
            r#"
                INSERT INTO packages
                (package_id, name, description, price, pricing_model, included_services, applicable_spaces)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(package_id.raw())
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.price)
        .bind(event.pricing_model.to_string())
        .bind(&included)
        .bind(&applicable)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(package_id)
    }

    async fn find_all_packages(&self) -> AppResult<Vec<Package>> {
        let rows: Vec<PackageRow> = sqlx::query_as(
            r#"
                SELECT package_id, name, description, price, pricing_model,
                       included_services, applicable_spaces
                FROM packages
                ORDER BY name ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Package::try_from).collect()
    }

    async fn find_package_by_id(&self, package_id: PackageId) -> AppResult<Option<Package>> {
        let row: Option<PackageRow> = sqlx::query_as(
            r#"
                SELECT package_id, name, description, price, pricing_model,
                       included_services, applicable_spaces
                FROM packages
                WHERE package_id = $1
            "#,
        )
        .bind(package_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Package::try_from).transpose()
    }

    async fn update_package(&self, event: UpdatePackage) -> AppResult<()> {
        // The applicable-spaces restriction distinguishes "leave unchanged"
        // from "clear", so read-modify-write inside one transaction instead
        // of a COALESCE update.
        let mut tx = self.db.begin().await?;

        let row: Option<PackageRow> = sqlx::query_as(
            r#"
                SELECT package_id, name, description, price, pricing_model,
                       included_services, applicable_spaces
                FROM packages
                WHERE package_id = $1
                FOR UPDATE
            "#,
        )
        .bind(event.package_id.raw())
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Err(AppError::EntityNotFound("specified package not found".into()));
        };
        let current = Package::try_from(row)?;

        let name = event.name.unwrap_or(current.name);
        let description = event.description.unwrap_or(current.description);
        let price = event.price.unwrap_or(current.price);
        let pricing_model = event.pricing_model.unwrap_or(current.pricing_model);
        let included = event.included_services.unwrap_or(current.included_services);
        let applicable = event.applicable_spaces.unwrap_or(current.applicable_spaces);

        let included: Vec<Uuid> = included.iter().map(|id| id.raw()).collect();
        let applicable: Option<Vec<Uuid>> =
            applicable.map(|spaces| spaces.iter().map(|id| id.raw()).collect());

        sqlx::query(
            r#"
                UPDATE packages
                SET name = $2,
                    description = $3,
                    price = $4,
                    pricing_model = $5,
                    included_services = $6,
                    applicable_spaces = $7
                WHERE package_id = $1
            "#,
        )
        .bind(event.package_id.raw())
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(pricing_model.to_string())
        .bind(&included)
        .bind(&applicable)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn delete_package(&self, event: DeletePackage) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM packages WHERE package_id = $1")
            .bind(event.package_id.raw())
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified package not found".into()));
        }

        Ok(())
    }
}
