use chrono::{DateTime, Local};
use serde::Deserialize;
use std::fmt;

/// Placeholder for absent client-reported IP/date fields.
pub const NOT_PROVIDED: &str = "Non fournie";
/// Placeholder for an absent client-reported user agent.
pub const NOT_PROVIDED_AGENT: &str = "Non fourni";
/// Placeholder when the connecting address cannot be determined.
pub const UNKNOWN_IP: &str = "Inconnue";
/// Placeholder when the request carries no `User-Agent` header.
pub const UNKNOWN_AGENT: &str = "Inconnu";

/// Server-side clock format used in journal blocks.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Client-submitted metadata, as posted by the frontend.
///
/// Every field is optional. A missing or unparseable body is treated as a
/// payload with all fields absent; clients are never rejected over it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisitPayload {
    pub ip_locale: Option<String>,
    pub ip_publique: Option<String>,
    pub date_heure: Option<String>,
    pub user_agent: Option<String>,
}

/// One fully-resolved visit: the four client-reported fields plus the three
/// server-observed ones. Placeholders are substituted at construction so a
/// record is always renderable.
#[derive(Debug, Clone)]
pub struct VisitRecord {
    pub ip_locale: String,
    pub ip_publique: String,
    /// Address the request actually came from, forwarded-for aware. Differs
    /// from `ip_publique` when the visitor sits behind a proxy/CDN.
    pub ip_serveur: String,
    pub date_heure_client: String,
    pub user_agent_client: String,
    pub user_agent_serveur: String,
    pub horodatage_serveur: String,
}

impl VisitRecord {
    /// Combine a client payload with server-side observations taken at `now`.
    pub fn observe(
        payload: VisitPayload,
        remote_ip: Option<String>,
        server_agent: Option<String>,
        now: DateTime<Local>,
    ) -> Self {
        Self {
            ip_locale: payload.ip_locale.unwrap_or_else(|| NOT_PROVIDED.into()),
            ip_publique: payload.ip_publique.unwrap_or_else(|| NOT_PROVIDED.into()),
            ip_serveur: remote_ip.unwrap_or_else(|| UNKNOWN_IP.into()),
            date_heure_client: payload.date_heure.unwrap_or_else(|| NOT_PROVIDED.into()),
            user_agent_client: payload.user_agent.unwrap_or_else(|| NOT_PROVIDED_AGENT.into()),
            user_agent_serveur: server_agent.unwrap_or_else(|| UNKNOWN_AGENT.into()),
            horodatage_serveur: now.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// The journal block. Label text, field order and the trailing blank line
/// are fixed: existing journals must keep concatenating cleanly.
impl fmt::Display for VisitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Nouvelle Visite (Serveur: {}) ---", self.horodatage_serveur)?;
        writeln!(f, "  IP Locale (Client):     {}", self.ip_locale)?;
        writeln!(f, "  IP Publique (Client):   {}", self.ip_publique)?;
        writeln!(f, "  IP Publique (Serveur):  {}", self.ip_serveur)?;
        writeln!(f, "  Date/Heure (Client):    {}", self.date_heure_client)?;
        writeln!(f, "  User-Agent (Client):    {}", self.user_agent_client)?;
        writeln!(f, "  User-Agent (Serveur):   {}", self.user_agent_serveur)?;
        writeln!(f, "------------------------------------------")?;
        writeln!(f)
    }
}
