use thiserror::Error;

/// Errors produced by the pure engine layer. The web front end never lets
/// these (or its own init failures) escape to the host page; every public
/// entry point degrades to a static fallback instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("invalid accent color {0:?}")]
    InvalidColor(String),
}
