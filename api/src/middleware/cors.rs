//! CORS middleware configuration for cross-origin requests.
//!
//! The token endpoint is called from a browser-based client during
//! verification, so a fixed set of development origins is allowed by
//! default. Production deployments override the set via `ALLOWED_ORIGINS`.
//! Credentials are never allowed across origins.

use actix_cors::Cors;
use std::env;

/// Origins accepted when `ALLOWED_ORIGINS` is unset (the Vite dev server).
const DEFAULT_ALLOWED_ORIGINS: [&str; 2] =
    ["http://localhost:5174", "http://127.0.0.1:5174"];

/// Creates a CORS middleware instance.
///
/// Allowed origins come from the comma-separated `ALLOWED_ORIGINS` variable,
/// falling back to the development origin set. All methods and headers are
/// permitted from allowed origins; credentials are not.
pub fn create_cors() -> Cors {
    match env::var("ALLOWED_ORIGINS") {
        Ok(list) => build_cors(list.split(',').map(str::trim).filter(|o| !o.is_empty())),
        Err(_) => build_cors(DEFAULT_ALLOWED_ORIGINS),
    }
}

fn build_cors<'a>(origins: impl IntoIterator<Item = &'a str>) -> Cors {
    let mut cors = Cors::default().allow_any_method().allow_any_header().max_age(3600);
    for origin in origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }
    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_origin_set_builds() {
        let _cors = build_cors(DEFAULT_ALLOWED_ORIGINS);
    }

    #[test]
    fn explicit_origin_list_builds() {
        let _cors =
            build_cors(["https://verify.example.com", "https://app.example.com"]);
    }
}
