//! Error type for carousel binding and configuration.
//!
//! None of these reach the page: the host logs them and leaves the affected
//! carousel inactive.

/// Errors raised while binding or configuring a carousel.
#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    /// A required element (viewport or track) was not found in the document.
    #[error("carousel {role} not found for selector `{selector}`")]
    MissingBinding { role: &'static str, selector: String },

    /// The host-supplied configuration document could not be parsed.
    #[error("invalid carousel configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// The browser rejected a DOM call.
    #[error("dom call `{op}` failed: {detail}")]
    Dom { op: &'static str, detail: String },
}

impl CarouselError {
    /// Whether this error means the carousel markup is simply absent from the page.
    #[must_use]
    pub fn is_missing_binding(&self) -> bool {
        matches!(self, Self::MissingBinding { .. })
    }
}
