//! Bare-domain extraction from user input.

use tracing::warn;

/// Extract a bare domain from a URL or domain string.
///
/// Strips the scheme, userinfo, port, path, query and a leading `www.`, and
/// lowercases the host. Input that does not parse as a host falls back to
/// plain prefix trimming, so this never fails.
///
/// # Example
/// ```
/// use roicalc_core::domain::extract_domain;
///
/// assert_eq!(extract_domain("https://www.AirOps.com/blog?x=1"), "airops.com");
/// assert_eq!(extract_domain("airops.com"), "airops.com");
/// ```
#[must_use]
pub fn extract_domain(input: &str) -> String {
    let trimmed = input.trim();
    parse_host(trimmed).unwrap_or_else(|| {
        let fallback = strip_prefixes(trimmed);
        warn!(input = trimmed, fallback = %fallback, "could not parse host, trimming instead");
        fallback
    })
}

/// Strict host parse. `None` when the input has no valid hostname.
fn parse_host(input: &str) -> Option<String> {
    let rest = match input.split_once("://") {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        Some(_) => return None,
        None => input,
    };

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let host = match host_port.rsplit_once(':') {
        Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
        Some(_) => return None,
        None => host_port,
    };

    if host.is_empty() || !host.split('.').all(is_label) {
        return None;
    }

    let host = host.to_lowercase();
    Some(match host.strip_prefix("www.") {
        Some(bare) if !bare.is_empty() => bare.to_string(),
        _ => host,
    })
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn is_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_alphanumeric() || c == '-')
}

/// Lenient fallback: drop an http(s) scheme, a leading `www.`, and any path.
fn strip_prefixes(input: &str) -> String {
    let lower = input.to_ascii_lowercase();
    let mut rest = input;
    for scheme in ["https://", "http://"] {
        if lower.starts_with(scheme) {
            rest = &input[scheme.len()..];
            break;
        }
    }
    if rest.to_ascii_lowercase().starts_with("www.") {
        rest = &rest[4..];
    }
    rest.split('/').next().unwrap_or_default().to_string()
}
