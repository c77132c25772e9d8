//! Error handling

use thiserror::Error;

/// Failure of the setting resolver/applier.
///
/// Both variants are terminal at the boundary that detects them: they are
/// logged and absorbed, never escalated into a process exit. Every other
/// camera failure stays a [`gphoto2::Error`] and propagates to `main` with
/// `?`.
#[derive(Debug, Error)]
pub enum SettingError {
  /// The path contained no addressable segments (empty or slashes only).
  ///
  /// Detected locally before any driver call; the tree is never touched.
  #[error("setting path {path:?} has no addressable segments")]
  InvalidPath {
    /// The path as given by the caller.
    path: String,
  },

  /// The camera does not expose the named setting, or rejected the value.
  #[error("setting {path:?} is not supported by this camera")]
  Unsupported {
    /// The path as given by the caller.
    path: String,
    /// The underlying driver error.
    #[source]
    source: gphoto2::Error,
  },
}
