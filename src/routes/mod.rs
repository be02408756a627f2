pub mod register;

use actix_web::web;

// Field values have no length rule; only the body as a whole is bounded.
const FORM_LIMIT: usize = 16 * 1024 * 1024;

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .app_data(web::FormConfig::default().limit(FORM_LIMIT))
            .route(web::get().to(register::form))
            .route(web::post().to(register::submit))
            .default_service(web::route().to(register::method_not_allowed)),
    );
}
