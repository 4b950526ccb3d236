//! Normalization failure.

use crate::uri::UriSyntaxError;

use super::Tier;

/// Every tier of the fallback chain rejected the input.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// The last tier could not resolve the input against the dummy base
    /// (e.g. a malformed IP literal in what looks like an absolute URL).
    #[error("cannot resolve {input:?} as a URI reference: {source}")]
    Unresolvable {
        input: String,
        #[source]
        source: url::ParseError,
    },
    /// A tier accepted the input, but the extracted components do not form a
    /// URI reference.
    #[error("cannot build a URI from {input:?} ({tier} tier): {source}")]
    Construct {
        input: String,
        tier: Tier,
        #[source]
        source: UriSyntaxError,
    },
}

impl NormalizeError {
    pub fn input(&self) -> &str {
        match self {
            NormalizeError::Unresolvable { input, .. } | NormalizeError::Construct { input, .. } => {
                input
            }
        }
    }
}
