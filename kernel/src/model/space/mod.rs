use crate::model::id::SpaceId;

pub mod event;

/// A bookable physical room or area of the venue.
#[derive(Debug, Clone)]
pub struct Space {
    pub space_id: SpaceId,
    pub space_name: String,
    pub description: String,
    pub capacity: i32,
    pub address: String,
    pub is_active: bool,
}
