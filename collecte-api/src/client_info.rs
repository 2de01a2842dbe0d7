//! `ClientInfo` extractor — what the server itself observes about a caller.

use axum::extract::{ConnectInfo, FromRequestParts};
use http::header::USER_AGENT;
use http::request::Parts;
use std::convert::Infallible;
use std::net::SocketAddr;

/// Server-observed caller identity: the connecting address (forwarded-for
/// aware) and the `User-Agent` header.
///
/// Extraction never fails; absent data stays `None` so the record layer can
/// substitute its placeholders.
#[derive(Debug, Clone)]
pub struct ClientInfo {
    pub remote_ip: Option<String>,
    pub user_agent: Option<String>,
}

impl<S> FromRequestParts<S> for ClientInfo
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Infallible> {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(first_forwarded_addr);

        // A proxy/CDN prepends the original client to X-Forwarded-For, so
        // that entry wins over the transport peer (which is then the proxy).
        let remote_ip = forwarded.or_else(|| {
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        });

        let user_agent = parts
            .headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        Ok(Self { remote_ip, user_agent })
    }
}

/// First comma-separated entry of an `X-Forwarded-For` value, trimmed.
fn first_forwarded_addr(value: &str) -> Option<String> {
    value
        .split(',')
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entry_of_list_is_taken() {
        assert_eq!(
            first_forwarded_addr("1.2.3.4, 5.6.7.8").as_deref(),
            Some("1.2.3.4")
        );
    }

    #[test]
    fn single_entry_is_trimmed() {
        assert_eq!(first_forwarded_addr("  9.9.9.9  ").as_deref(), Some("9.9.9.9"));
    }

    #[test]
    fn empty_value_yields_none() {
        assert!(first_forwarded_addr("").is_none());
        assert!(first_forwarded_addr("   ").is_none());
    }

    #[test]
    fn leading_empty_entry_yields_none() {
        // ", 5.6.7.8" — first token is empty after trimming
        assert!(first_forwarded_addr(", 5.6.7.8").is_none());
    }
}
