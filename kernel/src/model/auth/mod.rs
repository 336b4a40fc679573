use crate::model::id::UserId;

pub mod event;

pub struct AccessToken(pub String);

#[derive(Debug, PartialEq, Eq)]
pub struct AuthorizationPayload {
    pub user_id: UserId,
}
