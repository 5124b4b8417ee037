use actix_web::HttpRequest;

/// Resolve the rate-limit key for the calling client.
///
/// Priority: first hop of `X-Forwarded-For`, then `X-Real-IP`, then the
/// peer socket address. Falls back to the literal `"unknown"`, so every
/// client whose address cannot be resolved shares a single bucket.
pub fn get_client_ip(req: &HttpRequest) -> String {
    if let Some(forwarded) = req.headers().get("x-forwarded-for") {
        if let Ok(s) = forwarded.to_str() {
            let first = s.split(',').next().unwrap_or("").trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some(real_ip) = req.headers().get("x-real-ip") {
        if let Ok(s) = real_ip.to_str() {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
