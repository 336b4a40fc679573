use crate::model::id::SpaceId;

pub struct CreateSpace {
    pub space_name: String,
    pub description: String,
    pub capacity: i32,
    pub address: String,
    pub is_active: bool,
}

#[derive(Debug)]
pub struct UpdateSpace {
    pub space_id: SpaceId,
    pub space_name: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub address: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug)]
pub struct DeleteSpace {
    pub space_id: SpaceId,
}
