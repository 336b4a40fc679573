use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::quote::quote;

pub fn build_quote_routers() -> Router<AppRegistry> {
    Router::new().route("/quotes", post(quote))
}
