//! Strict RFC 3986 `URI-reference` parsing.

use iri_string::types::UriReferenceStr;

use super::{Uri, UriSyntaxError};

/// Splits `input` into its raw components, rejecting anything outside the
/// RFC 3986 grammar (non-ASCII, spaces, stray `%`, unbalanced brackets...).
pub(super) fn parse_strict(input: &str) -> Result<Uri, UriSyntaxError> {
    let reference = UriReferenceStr::new(input).map_err(|source| UriSyntaxError::Invalid {
        text: input.to_string(),
        source,
    })?;

    Ok(Uri {
        scheme: reference.scheme_str().map(str::to_owned),
        authority: reference.authority_str().map(str::to_owned),
        path: reference.path_str().to_owned(),
        query: reference.query().map(|q| q.as_str().to_owned()),
        fragment: reference.fragment().map(|f| f.as_str().to_owned()),
    })
}
