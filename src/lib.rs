//! One-shot tethered camera capture.
//!
//! Opens the first camera libgphoto2 can autodetect, optionally nudges its
//! autofocus through the configuration tree, captures a single image and
//! downloads it as `<unix-timestamp>.jpg`, removing the on-device copy after
//! a successful transfer.
//!
//! ```no_run
//! use std::path::Path;
//! use tethershot::CameraSession;
//!
//! # fn main() -> gphoto2::Result<()> {
//! let session = CameraSession::open()?;
//! session.autofocus();
//! let saved = session.capture_to(Path::new("."))?;
//! println!("saved {}", saved.display());
//! # Ok(())
//! # }
//! ```

#![deny(unused_must_use)]
#![deny(missing_docs)] // Force documentation on all public API's

pub mod camera;
pub mod error;
pub mod settings;

#[doc(inline)]
pub use crate::{
  camera::CameraSession,
  error::SettingError,
  settings::{apply_setting, SettingValue},
};
