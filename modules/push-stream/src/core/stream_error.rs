//! Stream error definitions.


use alloc::string::String;

/// Errors raised at the readable-resource boundary.
///
/// Stage operations never return these; an async source absorbs them into its ended state.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StreamError {
  /// The resource could not be acquired.
  #[error("resource unavailable: {0}")]
  ResourceUnavailable(String),
  /// A read against the resource failed.
  #[error("read failed: {0}")]
  ReadFailed(String),
}
