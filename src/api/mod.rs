//! API endpoint modules.

pub mod exports;
pub mod health;
pub mod openapi;
pub mod specifications;
pub mod trims;

pub use exports::configure_routes as configure_export_routes;
pub use health::configure_health_routes;
pub use openapi::ApiDoc;
pub use specifications::configure_routes as configure_specification_routes;
pub use trims::configure_routes as configure_trim_routes;

use actix_web::web;

/// Register every `/api/v1` route group.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_health_routes)
        .configure(configure_trim_routes)
        .configure(configure_export_routes)
        .configure(configure_specification_routes);
}
