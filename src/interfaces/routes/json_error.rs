use actix_web::{
    web,
    http::StatusCode,
    error::InternalError,
};

use crate::handlers::json_error::json_error;

/// Malformed JSON bodies get a JSON 400 instead of actix's default page.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        let response = json_error(StatusCode::BAD_REQUEST, "Invalid JSON payload", &detail);
        InternalError::from_response(err, response).into()
    }));
}
