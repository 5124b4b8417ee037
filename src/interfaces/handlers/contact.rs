use actix_web::{web, HttpResponse, Responder};

use crate::{errors::AppError, use_cases::extractors::ClientKey, AppState};

/// `POST /api/contact`. The payload stays untyped here; validation is the
/// use case's job and must run after the rate-limit check.
pub async fn submit_contact(
    state: web::Data<AppState>,
    client: ClientKey,
    payload: web::Json<serde_json::Value>,
) -> impl Responder {
    if !state.rate_limiter.check(&client.0) {
        return AppError::RateLimited.to_http_response();
    }

    match state
        .contact_handler
        .submit_contact_message(payload.into_inner(), &client.0)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => e.to_http_response(),
    }
}

/// Catch-all for non-POST methods on the contact resource.
pub async fn method_not_allowed() -> impl Responder {
    AppError::MethodNotAllowed.to_http_response()
}
