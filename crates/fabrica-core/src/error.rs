use thiserror::Error;

/// Errors surfaced by generation entry points.
///
/// Only `InvalidArgument` ever escapes a generation call, and only during
/// up-front argument validation. `Provider` failures are recovered inside
/// the engine (retry, then null) and never reach the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("provider error: {0}")]
    Provider(String),
}

pub type Result<T> = std::result::Result<T, Error>;
