//! Error kinds surfaced by the presentation core.
//!
//! None of these are fatal to the page. Each owner decides the recovery:
//! missing scroll targets are ignored, invalid links are reported to the
//! user, and persistence failures degrade to session-only state.

#[derive(Debug, thiserror::Error)]
pub enum PresentationError {
    #[error("no element registered for section `{target}`")]
    MissingScrollTarget { target: String },
    #[error("rejected external link `{url}`")]
    InvalidExternalLink { url: String },
    #[error("preference storage unavailable: {0}")]
    PersistenceUnavailable(String),
    #[error("invalid portfolio content: {0}")]
    InvalidContent(#[source] serde_json::Error),
    #[error("invalid presentation config: {0}")]
    InvalidConfig(#[source] serde_json::Error),
}
