use std::time::Duration;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;
pub mod client;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, routes};
pub use infrastructure::{email, limiter, utils};

use email::dispatcher::EmailDispatcher;
use limiter::rate_limiter::RateLimiter;
use use_cases::contact::ContactHandler;

pub struct AppState {
    pub contact_handler: ContactHandler,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        let dispatcher = EmailDispatcher::from_config(config);
        let contact_handler = ContactHandler::new(dispatcher);
        let rate_limiter = RateLimiter::new(
            config.rate_limit_max_requests,
            Duration::from_secs(config.rate_limit_window_secs),
        );

        AppState {
            contact_handler,
            rate_limiter,
        }
    }
}
