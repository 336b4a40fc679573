use kernel::model::space::Space;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
pub struct SpaceRow {
    pub space_id: Uuid,
    pub space_name: String,
    pub description: String,
    pub capacity: i32,
    pub address: String,
    pub is_active: bool,
}

impl From<SpaceRow> for Space {
    fn from(value: SpaceRow) -> Self {
        let SpaceRow {
            space_id,
            space_name,
            description,
            capacity,
            address,
            is_active,
        } = value;
        Space {
            space_id: space_id.into(),
            space_name,
            description,
            capacity,
            address,
            is_active,
        }
    }
}
