//! Error types for the core crate.
//!
//! Only setup-time failures surface as errors; everything on the request
//! path degrades to an empty result at the service boundary instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArmoryError {
    #[error("failed to load config from {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: confy::ConfyError,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
