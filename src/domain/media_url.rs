use std::fmt;

use url::Url;

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// A media source URL that passed submission checks: absolute, `http`/`https`, with a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrl(Url);

impl MediaUrl {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn host(&self) -> &str {
        self.0.host_str().unwrap_or_default()
    }
}

impl fmt::Display for MediaUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaUrlError {
    #[error("invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),
    #[error("URL must use http or https scheme")]
    UnsupportedScheme(String),
    #[error("URL must have a valid host")]
    MissingHost,
}

/// Checks are applied in order and stop at the first failure.
pub fn validate_media_url(raw: &str) -> Result<MediaUrl, MediaUrlError> {
    let parsed = Url::parse(raw)?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(MediaUrlError::UnsupportedScheme(parsed.scheme().to_string()));
    }

    // The WHATWG parser promotes the first path segment to the host for
    // `http:///a` and `http:/a`, so the host is checked on the raw text.
    if raw_authority_host(raw).is_none() {
        return Err(MediaUrlError::MissingHost);
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(MediaUrl(parsed)),
        _ => Err(MediaUrlError::MissingHost),
    }
}

/// Host as written between `scheme://` and the path, without userinfo or port.
fn raw_authority_host(raw: &str) -> Option<&str> {
    let (_, rest) = raw.trim().split_once(':')?;
    let rest = rest.strip_prefix("//")?;
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    let host = if host_port.starts_with('[') {
        host_port.split_inclusive(']').next().unwrap_or_default()
    } else {
        host_port.split(':').next().unwrap_or_default()
    };
    Some(host).filter(|host| !host.is_empty())
}
