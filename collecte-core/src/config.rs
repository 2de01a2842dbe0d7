use crate::error::{CollecteError, Result};
use figment::{Figment, providers::{Env, Format, Yaml}};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Top-level service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollecteConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub journal: JournalConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address. The service sits behind a proxy/CDN in the intended
    /// deployment, so it listens on all interfaces by default.
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Visit journal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    /// Path of the append-only journal file, created on first write.
    #[serde(default = "default_journal_path")]
    pub path: PathBuf,
}

// ── Defaults ──────────────────────────────────────────────────

fn default_bind() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 5000 }
fn default_journal_path() -> PathBuf { PathBuf::from("ips_collectees.log") }

// ── Impls ─────────────────────────────────────────────────────

impl Default for CollecteConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            journal: JournalConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            path: default_journal_path(),
        }
    }
}

impl ServerConfig {
    /// Parsed socket address for the listener.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind, self.port)
            .parse()
            .map_err(|e| CollecteError::Config(format!("invalid listen address: {e}")))
    }
}

impl CollecteConfig {
    /// Load configuration from YAML file + env overrides.
    ///
    /// Precedence, last wins: file values, `COLLECTE_*` variables
    /// (`COLLECTE_SERVER_PORT`, `COLLECTE_JOURNAL_PATH`, ...), then the bare
    /// `PORT` variable that PaaS runtimes inject.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config: CollecteConfig = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("COLLECTE_").split("_"))
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()))
            .extract()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ── Default values ────────────────────────────────────────────

    #[test]
    fn default_server_config_has_expected_values() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind, "0.0.0.0");
        assert_eq!(cfg.port, 5000);
    }

    #[test]
    fn default_journal_path_matches_legacy_layout() {
        let cfg = JournalConfig::default();
        assert_eq!(cfg.path, PathBuf::from("ips_collectees.log"));
    }

    #[test]
    fn collecte_config_default_builds_without_panic() {
        let cfg = CollecteConfig::default();
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.journal.path, PathBuf::from("ips_collectees.log"));
    }

    // ── socket_addr() ─────────────────────────────────────────────

    #[test]
    fn socket_addr_combines_bind_and_port() {
        let cfg = ServerConfig { bind: "127.0.0.1".into(), port: 8080 };
        assert_eq!(cfg.socket_addr().unwrap(), "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn socket_addr_rejects_garbage_bind() {
        let cfg = ServerConfig { bind: "not-an-address".into(), port: 8080 };
        let err = cfg.socket_addr().unwrap_err();
        assert!(matches!(err, CollecteError::Config(_)));
    }

    // ── CollecteConfig::load() ────────────────────────────────────

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let cfg =
            CollecteConfig::load(Path::new("/nonexistent/path/collecte.yaml")).unwrap();
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.server.bind, "0.0.0.0");
    }

    #[test]
    fn load_from_valid_yaml_overrides_defaults() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(tmpfile, "server:\n  bind: \"127.0.0.1\"\n  port: 8888\n").unwrap();
        let cfg = CollecteConfig::load(tmpfile.path()).unwrap();
        assert_eq!(cfg.server.bind, "127.0.0.1");
        assert_eq!(cfg.server.port, 8888);
        // Defaults still apply for unspecified fields
        assert_eq!(cfg.journal.path, PathBuf::from("ips_collectees.log"));
    }

    #[test]
    fn load_yaml_with_journal_path() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(tmpfile, "journal:\n  path: \"/var/log/collecte/visites.log\"\n").unwrap();
        let cfg = CollecteConfig::load(tmpfile.path()).unwrap();
        assert_eq!(cfg.journal.path, PathBuf::from("/var/log/collecte/visites.log"));
    }
}
