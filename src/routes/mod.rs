// Route exports
pub mod errors;
pub mod pages;
pub mod plan;

pub use errors::{form_config, json_config};
pub use plan::AppState;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(plan::configure),
    )
    .configure(pages::configure);
}
