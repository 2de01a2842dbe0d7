use crate::client_info::ClientInfo;
use crate::server::ApiState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use chrono::Local;
use collecte_core::visit::{VisitPayload, VisitRecord};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{error, info};

/// `POST /enregistrer-ip` — record one visit.
///
/// The body is parsed permissively: anything that does not deserialize into
/// a [`VisitPayload`] (missing body, invalid JSON, wrong field types) counts
/// as a payload with every field absent. Clients are never rejected for it.
pub async fn record_visit(
    State(state): State<Arc<ApiState>>,
    client: ClientInfo,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let payload: VisitPayload = serde_json::from_slice(&body).unwrap_or_default();

    let record = VisitRecord::observe(payload, client.remote_ip, client.user_agent, Local::now());
    let block = record.to_string();

    // Mirror the entry on the server console for live inspection.
    info!("{}", block.trim_end());

    match state.journal.append(&block) {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "success", "message": "Données enregistrées" })),
        ),
        Err(e) => {
            error!(
                error = %e,
                path = %state.journal.path().display(),
                "Journal append failed"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "message": "Erreur lors de l'enregistrement" })),
            )
        }
    }
}
