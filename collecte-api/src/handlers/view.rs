use crate::server::ApiState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use std::sync::Arc;
use tracing::error;

const EMPTY_PAGE: &str = "<html><body>Aucune IP enregistrée pour le moment.</body></html>";

/// `GET /voir-ips` — render the accumulated journal for human inspection.
///
/// The journal text is client-controlled (self-reported IPs, user agents),
/// so it is HTML-escaped before being embedded in the page. An unreadable
/// journal is surfaced as a 500; only a journal that does not exist yet
/// yields the empty page.
pub async fn view_visits(
    State(state): State<Arc<ApiState>>,
) -> Result<Html<String>, StatusCode> {
    match state.journal.read_all() {
        Ok(Some(content)) => Ok(Html(render_page(&content))),
        Ok(None) => Ok(Html(EMPTY_PAGE.to_owned())),
        Err(e) => {
            error!(
                error = %e,
                path = %state.journal.path().display(),
                "Journal read failed"
            );
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn render_page(content: &str) -> String {
    format!(
        "<html><head><title>IPs Collectées</title></head><body><pre>{}</pre></body></html>",
        escape_html(content)
    )
}

/// Minimal HTML escaping for text embedded in the `<pre>` block.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
