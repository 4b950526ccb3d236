//! Structured URI value.
//!
//! A [`Uri`] holds the five RFC 3986 components in their raw (percent-encoded)
//! form. It is produced either by the strict parser ([`Uri::parse`]) or by
//! assembling components ([`Uri::from_components`]), which quotes whatever is
//! not legal in each component and then re-validates the result.

pub(crate) mod quote;
mod strict;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use quote::Component;

/// Text that is not, or does not recompose into, an RFC 3986 URI reference.
#[derive(Debug, thiserror::Error)]
pub enum UriSyntaxError {
    /// Rejected by the strict grammar.
    #[error("{text:?} is not a valid URI reference: {source}")]
    Invalid {
        text: String,
        #[source]
        source: iri_string::validate::Error,
    },
    /// Valid text, but it splits into different components than the ones it
    /// was assembled from (e.g. an authority followed by a rootless path).
    #[error("components do not recompose into the same URI reference: {text:?}")]
    Ambiguous { text: String },
}

/// URI reference split into scheme, authority, path, query and fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    scheme: Option<String>,
    authority: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

/// Decoded, owned view of a [`Uri`], for display and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UriParts {
    pub scheme: Option<String>,
    pub authority: Option<String>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl Uri {
    /// Strictly parses `input` as an RFC 3986 URI reference.
    pub fn parse(input: &str) -> Result<Uri, UriSyntaxError> {
        strict::parse_strict(input)
    }

    /// Builds a URI from individual components.
    ///
    /// Characters that are not legal in a component are percent-encoded,
    /// existing `%XX` escapes are kept. The scheme is taken verbatim. Fails if
    /// the quoted components do not form a URI reference together.
    pub fn from_components(
        scheme: Option<&str>,
        authority: Option<&str>,
        path: &str,
        query: Option<&str>,
        fragment: Option<&str>,
    ) -> Result<Uri, UriSyntaxError> {
        let candidate = Uri {
            scheme: scheme.map(str::to_owned),
            authority: authority.map(|a| quote::quote(a, Component::Authority).into_owned()),
            path: quote::quote(path, Component::Path).into_owned(),
            query: query.map(|q| quote::quote(q, Component::Query).into_owned()),
            fragment: fragment.map(|f| quote::quote(f, Component::Fragment).into_owned()),
        };

        let text = candidate.to_string();
        let reparsed = Uri::parse(&text)?;
        if reparsed != candidate {
            return Err(UriSyntaxError::Ambiguous { text });
        }
        Ok(candidate)
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn raw_authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    pub fn raw_path(&self) -> &str {
        &self.path
    }

    pub fn raw_query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn raw_fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Authority with percent-escapes decoded.
    pub fn authority(&self) -> Option<Cow<'_, str>> {
        self.authority.as_deref().map(quote::decode)
    }

    /// Path with percent-escapes decoded.
    pub fn path(&self) -> Cow<'_, str> {
        quote::decode(&self.path)
    }

    /// Query with percent-escapes decoded (`b%20c` → `b c`).
    pub fn query(&self) -> Option<Cow<'_, str>> {
        self.query.as_deref().map(quote::decode)
    }

    /// Fragment with percent-escapes decoded.
    pub fn fragment(&self) -> Option<Cow<'_, str>> {
        self.fragment.as_deref().map(quote::decode)
    }

    pub fn parts(&self) -> UriParts {
        UriParts {
            scheme: self.scheme.clone(),
            authority: self.authority().map(Cow::into_owned),
            path: self.path().into_owned(),
            query: self.query().map(Cow::into_owned),
            fragment: self.fragment().map(Cow::into_owned),
        }
    }

    /// True when the URI has no scheme.
    pub fn is_relative(&self) -> bool {
        self.scheme.is_none()
    }
}

impl fmt::Display for Uri {
    /// Component recomposition, RFC 3986 §5.3.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{}:", scheme)?;
        }
        if let Some(authority) = &self.authority {
            write!(f, "//{}", authority)?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

impl FromStr for Uri {
    type Err = UriSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uri::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_recomposes_parsed_text() {
        for text in [
            "http://example.com/a?b=c#frag",
            "/a/b?x=1",
            "mailto:someone@example.com",
            "//cdn.example.com/lib.js",
            "?only=query",
            "#only-fragment",
            "file:///etc/hosts",
            "",
        ] {
            let uri: Uri = text.parse().unwrap();
            assert_eq!(uri.to_string(), text);
        }
    }

    #[test]
    fn from_components_quotes_illegal_characters() {
        let uri = Uri::from_components(
            Some("http"),
            Some("example.com"),
            "/a b",
            Some("q=x y&z={1}"),
            Some("sec tion"),
        )
        .unwrap();
        assert_eq!(
            uri.to_string(),
            "http://example.com/a%20b?q=x%20y&z=%7B1%7D#sec%20tion"
        );
        assert_eq!(uri.path(), "/a b");
        assert_eq!(uri.query().as_deref(), Some("q=x y&z={1}"));
        assert_eq!(uri.fragment().as_deref(), Some("sec tion"));
    }

    #[test]
    fn from_components_keeps_existing_escapes() {
        let uri = Uri::from_components(None, None, "/a%20b", Some("c%3Dd"), None).unwrap();
        assert_eq!(uri.raw_path(), "/a%20b");
        assert_eq!(uri.raw_query(), Some("c%3Dd"));
        assert_eq!(uri.query().as_deref(), Some("c=d"));
    }

    #[test]
    fn from_components_rejects_rootless_path_after_authority() {
        let err = Uri::from_components(Some("http"), Some("example.com"), "a", None, None)
            .unwrap_err();
        assert!(matches!(err, UriSyntaxError::Ambiguous { .. }));
    }

    #[test]
    fn from_components_rejects_colon_in_first_relative_segment() {
        let err = Uri::from_components(None, None, "isbn:0451450523", None, None).unwrap_err();
        assert!(matches!(err, UriSyntaxError::Ambiguous { .. }));
    }

    #[test]
    fn from_components_rejects_double_slash_path_without_authority() {
        let err = Uri::from_components(None, None, "//host/x", None, None).unwrap_err();
        assert!(matches!(err, UriSyntaxError::Ambiguous { .. }));
    }

    #[test]
    fn from_components_rejects_bad_scheme() {
        let err =
            Uri::from_components(Some("1http"), Some("example.com"), "/", None, None).unwrap_err();
        assert!(matches!(err, UriSyntaxError::Invalid { .. }));
    }

    #[test]
    fn parts_are_decoded() {
        let uri: Uri = "http://ex%41mple.com/caf%C3%A9?b%20c#f%21".parse().unwrap();
        assert_eq!(
            uri.parts(),
            UriParts {
                scheme: Some("http".into()),
                authority: Some("exAmple.com".into()),
                path: "/café".into(),
                query: Some("b c".into()),
                fragment: Some("f!".into()),
            }
        );
    }

    #[test]
    fn relative_means_no_scheme() {
        assert!(Uri::parse("/a").unwrap().is_relative());
        assert!(Uri::parse("//host/a").unwrap().is_relative());
        assert!(!Uri::parse("urn:x").unwrap().is_relative());
    }
}
