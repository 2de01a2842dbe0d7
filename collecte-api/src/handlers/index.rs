use axum::response::Json;
use serde_json::{Value, json};

/// `GET /` — liveness plus route discovery. The payload is static:
/// independent of journal state and of anything in the request.
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Backend de collecte d'IPs opérationnel",
        "endpoint_enregistrement": "/enregistrer-ip",
        "endpoint_visualisation": "/voir-ips",
    }))
}
