//! Lenient URI normalization.
//!
//! Interprets arbitrary text as a URI by trying three tiers in order, each only
//! when the previous one rejected the input:
//!
//! 1. strict RFC 3986 parsing, result returned unchanged (fragment included);
//! 2. the WHATWG URL parser, which tolerates spaces, braces and similar
//!    characters but needs a scheme and an authority; the URI is rebuilt from
//!    the URL's scheme, authority, path and query (fragment dropped);
//! 3. resolution against [`DUMMY_BASE_URL`]; only path and query of the
//!    resolved URL are kept, giving a relative URI.

mod base;
mod error;

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use url::Url;

use crate::uri::{quote, Uri, UriSyntaxError};

pub use base::DUMMY_BASE_URL;
pub use error::NormalizeError;

use base::DUMMY_BASE;

/// Fallback tier that produced a normalized URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Input already was an RFC 3986 URI reference.
    Strict,
    /// Rebuilt from the URL parser's components.
    Url,
    /// Resolved against the dummy base.
    Relative,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::Strict => "strict",
            Tier::Url => "url",
            Tier::Relative => "relative",
        };
        f.write_str(s)
    }
}

/// A normalized URI together with the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub uri: Uri,
    pub tier: Tier,
}

/// Interprets `input` as a URI, falling back to more permissive parsers.
///
/// # Examples
///
/// - `http://example.com/a?b=c#frag` → parsed as is, fragment kept
/// - `http://example.com/a?b c#frag` → query `b c`, no fragment
/// - `/a b?x=1` → relative URI, path `/a b`, query `x=1`
pub fn normalize(input: &str) -> Result<Uri, NormalizeError> {
    normalize_with_tier(input).map(|n| n.uri)
}

/// Same as [`normalize`], also reporting which tier succeeded.
pub fn normalize_with_tier(input: &str) -> Result<Normalized, NormalizeError> {
    let normalized = match Uri::parse(input) {
        Ok(uri) => Normalized {
            uri,
            tier: Tier::Strict,
        },
        Err(err) => {
            tracing::debug!("strict parse rejected {:?}: {}", input, err);
            fallback(input)?
        }
    };
    tracing::debug!(
        "normalized {:?} -> {} ({} tier)",
        input,
        normalized.uri,
        normalized.tier
    );
    Ok(normalized)
}

fn fallback(input: &str) -> Result<Normalized, NormalizeError> {
    let construct_err = |tier: Tier| {
        move |source: UriSyntaxError| NormalizeError::Construct {
            input: input.to_string(),
            tier,
            source,
        }
    };

    if let Some(url) = parse_with_authority(input) {
        let uri = Uri::from_components(
            Some(url.scheme()),
            Some(url.authority()),
            url.path(),
            url.query(),
            None,
        )
        .map_err(construct_err(Tier::Url))?;
        return Ok(Normalized {
            uri,
            tier: Tier::Url,
        });
    }

    let resolved = DUMMY_BASE
        .join(&quote::escape_for_resolution(input))
        .map_err(|source| NormalizeError::Unresolvable {
            input: input.to_string(),
            source,
        })?;
    let path = rootless_safe(resolved.path());
    let uri = Uri::from_components(None, None, &path, resolved.query(), None)
        .map_err(construct_err(Tier::Relative))?;
    Ok(Normalized {
        uri,
        tier: Tier::Relative,
    })
}

/// Without an authority a path may not begin with `//`; `/.` keeps it a path.
fn rootless_safe(path: &str) -> Cow<'_, str> {
    if path.starts_with("//") {
        Cow::Owned(format!("/.{}", path))
    } else {
        Cow::Borrowed(path)
    }
}

/// URL parse that only counts as a success when the URL has an authority.
fn parse_with_authority(input: &str) -> Option<Url> {
    match Url::parse(input) {
        Ok(url) if url.has_authority() => Some(url),
        Ok(url) => {
            tracing::debug!(
                "URL {} has no authority, dropping scheme {:?} and resolving as relative",
                url,
                url.scheme()
            );
            None
        }
        Err(err) => {
            tracing::debug!("URL parser rejected {:?}: {}", input, err);
            None
        }
    }
}
