use axum::Router;
use registry::AppRegistry;

use super::{
    auth::build_auth_routers, booking::build_booking_routers, catalog::build_catalog_routers,
    health::build_health_check_routers, quote::build_quote_routers, space::build_space_routers,
    user::build_user_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_auth_routers())
        .merge(build_user_routers())
        .merge(build_space_routers())
        .merge(build_catalog_routers())
        .merge(build_booking_routers())
        .merge(build_quote_routers());
    Router::new().nest("/api/v1", router)
}
