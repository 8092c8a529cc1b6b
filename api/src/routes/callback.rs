//! Handler for POST /smile/callback.

use actix_web::{web, HttpResponse};

/// Handler for POST /smile/callback
///
/// Server-to-server result delivery from Smile ID. The payload is logged
/// and acknowledged with `{"ok": true}` regardless of content; malformed
/// JSON is rejected by the extractor before this handler runs.
///
/// Inbound signature verification and payload persistence are intentionally
/// not implemented.
pub async fn smile_callback(payload: web::Json<serde_json::Value>) -> HttpResponse {
    log::info!("Smile callback: {}", payload.0);
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}
