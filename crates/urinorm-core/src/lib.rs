pub mod config;
pub mod logging;

pub mod normalize;
pub mod uri;

pub use normalize::{normalize, normalize_with_tier, NormalizeError, Normalized, Tier};
pub use uri::{Uri, UriParts, UriSyntaxError};
