use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    cancel_booking, register_booking, show_booking, show_booking_beo, show_booking_list,
    update_booking, update_booking_status,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new()
        .route("/", post(register_booking))
        .route("/", get(show_booking_list))
        .route("/:booking_id", get(show_booking))
        .route("/:booking_id", put(update_booking))
        .route("/:booking_id", delete(cancel_booking))
        .route("/:booking_id/status", put(update_booking_status))
        .route("/:booking_id/beo", get(show_booking_beo));

    Router::new().nest("/bookings", booking_routers)
}
