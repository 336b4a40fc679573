use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::catalog::{
    delete_package, delete_service, import_services, register_package, register_service,
    show_package, show_package_list, show_service, show_service_list, update_package,
    update_service,
};

pub fn build_catalog_routers() -> Router<AppRegistry> {
    let service_routers = Router::new()
        .route("/", post(register_service))
        .route("/", get(show_service_list))
        .route("/import", post(import_services))
        .route("/:service_id", get(show_service))
        .route("/:service_id", put(update_service))
        .route("/:service_id", delete(delete_service));

    let package_routers = Router::new()
        .route("/", post(register_package))
        .route("/", get(show_package_list))
        .route("/:package_id", get(show_package))
        .route("/:package_id", put(update_package))
        .route("/:package_id", delete(delete_package));

    Router::new()
        .nest("/services", service_routers)
        .nest("/packages", package_routers)
}
