use std::fmt;
use std::str::FromStr;

use crate::error::{ChannelError, Result};

/// The scheme+host+port triple used by the messaging channel to restrict
/// delivery.
///
/// Scheme and host are compared case-insensitively and stored lowercased.
/// Default ports for well-known schemes are normalized away, so
/// `https://x.test:443` and `https://x.test` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl Origin {
    /// Extract the origin component from a full URL string.
    ///
    /// Accepts bare origins (`https://x.test`) as well as full URLs
    /// (`https://x.test:8443/page?q=1`); userinfo, path, query, and
    /// fragment are discarded.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        let (scheme, rest) = trimmed
            .split_once("://")
            .ok_or_else(|| invalid(input, "missing scheme"))?;
        if !is_valid_scheme(scheme) {
            return Err(invalid(input, "malformed scheme"));
        }

        let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let mut authority = &rest[..authority_end];

        // Userinfo is not part of an origin.
        if let Some((_, host_port)) = authority.rsplit_once('@') {
            authority = host_port;
        }

        let (host, port_str) = split_host_port(authority)?;
        if host.is_empty() {
            return Err(invalid(input, "empty host"));
        }

        let port = match port_str {
            Some(p) => Some(
                p.parse::<u16>()
                    .map_err(|_| invalid(input, "malformed port"))?,
            ),
            None => None,
        };

        let scheme = scheme.to_ascii_lowercase();
        let port = port.filter(|&p| Some(p) != default_port(&scheme));

        Ok(Self {
            scheme,
            host: host.to_ascii_lowercase(),
            port,
        })
    }

    /// URL scheme, lowercased.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host, lowercased. Bracketed for IPv6 literals.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explicit non-default port, if any.
    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}://{}:{}", self.scheme, self.host, port),
            None => write!(f, "{}://{}", self.scheme, self.host),
        }
    }
}

impl FromStr for Origin {
    type Err = ChannelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn invalid(input: &str, reason: &'static str) -> ChannelError {
    ChannelError::InvalidOrigin {
        input: input.to_string(),
        reason,
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Split `host[:port]`, honoring bracketed IPv6 literals (`[::1]:8080`).
fn split_host_port(authority: &str) -> Result<(&str, Option<&str>)> {
    if let Some(rest) = authority.strip_prefix('[') {
        let end = rest
            .find(']')
            .ok_or_else(|| invalid(authority, "unterminated IPv6 literal"))?;
        let host = &authority[..end + 2];
        return match &rest[end + 1..] {
            "" => Ok((host, None)),
            tail => match tail.strip_prefix(':') {
                Some(port) => Ok((host, Some(port))),
                None => Err(invalid(authority, "malformed IPv6 authority")),
            },
        };
    }

    match authority.rsplit_once(':') {
        Some((host, port)) => Ok((host, Some(port))),
        None => Ok((authority, None)),
    }
}

fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" | "ws" => Some(80),
        "https" | "wss" => Some(443),
        _ => None,
    }
}
