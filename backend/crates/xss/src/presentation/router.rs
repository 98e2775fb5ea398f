//! XSS Lesson Router

use axum::{Router, routing::post};

use crate::presentation::handlers;

/// Create the XSS mitigation router
pub fn xss_router() -> Router {
    Router::new().route("/CrossSiteScripting/attack4", post(handlers::attack4))
}
