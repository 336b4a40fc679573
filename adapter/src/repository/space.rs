use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::SpaceId;
use kernel::model::space::{
    event::{CreateSpace, DeleteSpace, UpdateSpace},
    Space,
};
use kernel::repository::space::SpaceRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::space::SpaceRow, ConnectionPool};

#[derive(new)]
pub struct SpaceRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SpaceRepository for SpaceRepositoryImpl {
    async fn create(&self, event: CreateSpace) -> AppResult<SpaceId> {
        let space_id = SpaceId::new();
        sqlx::query(
            r#"
                INSERT INTO spaces (space_id, space_name, description, capacity, address, is_active)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(space_id.raw())
        .bind(&event.space_name)
        .bind(&event.description)
        .bind(event.capacity)
        .bind(&event.address)
        .bind(event.is_active)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(space_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Space>> {
        let rows: Vec<SpaceRow> = sqlx::query_as(
            r#"
                SELECT space_id, space_name, description, capacity, address, is_active
                FROM spaces
                ORDER BY space_name ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Space::from).collect())
    }

    async fn find_by_id(&self, space_id: SpaceId) -> AppResult<Option<Space>> {
        let row: Option<SpaceRow> = sqlx::query_as(
            r#"
                SELECT space_id, space_name, description, capacity, address, is_active
                FROM spaces
                WHERE space_id = $1
            "#,
        )
        .bind(space_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Space::from))
    }

    async fn update(&self, event: UpdateSpace) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE spaces
                SET space_name = COALESCE($2, space_name),
                    description = COALESCE($3, description),
                    capacity = COALESCE($4, capacity),
                    address = COALESCE($5, address),
                    is_active = COALESCE($6, is_active)
                WHERE space_id = $1
            "#,
        )
        .bind(event.space_id.raw())
        .bind(event.space_name)
        .bind(event.description)
        .bind(event.capacity)
        .bind(event.address)
        .bind(event.is_active)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified space not found".into()));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteSpace) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM spaces WHERE space_id = $1")
            .bind(event.space_id.raw())
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified space not found".into()));
        }

        Ok(())
    }
}
