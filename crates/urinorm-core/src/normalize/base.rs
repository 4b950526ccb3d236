//! Placeholder base for resolving relative references.

use once_cell::sync::Lazy;
use url::Url;

pub const DUMMY_BASE_URL: &str = "http://www.dummy.com/";

/// Parsed once on first use; only its path/query handling matters, its scheme
/// and host never leak into results.
pub(super) static DUMMY_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse(DUMMY_BASE_URL).expect("dummy base URL literal must parse"));
