use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use crate::utils::get_client_ip::get_client_ip;

/// Extractor resolving the rate-limit key for the calling client.
/// Never fails; unresolvable clients resolve to the shared "unknown" key.
/// Usage: add `client: ClientKey` as a parameter to your handler function.
#[derive(Debug)]
pub struct ClientKey(pub String);

impl FromRequest for ClientKey {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(ClientKey(get_client_ip(req))))
    }
}
