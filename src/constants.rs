use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Confirmation shown to the sender on a successful submission.
pub const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso!";
