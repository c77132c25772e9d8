//! Camera session
//!
//! [`CameraSession`] replaces what would otherwise be a process-global camera
//! handle: the entry point constructs it once and hands it to the operations
//! that need it. The connection stays open for the life of the process and is
//! released on drop.

use crate::settings::{apply_or_warn, SettingValue};
use chrono::Utc;
use gphoto2::{widget::Widget, Camera, Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration path of the autofocus drive toggle on PTP cameras.
const AUTOFOCUS_DRIVE: &str = "/main/actions/autofocusdrive";

/// An open connection to a single tethered camera.
pub struct CameraSession {
  camera: Camera,
}

impl CameraSession {
  /// Opens the first camera the driver can autodetect.
  pub fn open() -> Result<Self> {
    let camera = Context::new()?.autodetect_camera().wait()?;
    Ok(Self { camera })
  }

  /// Nudges the autofocus of the attached camera.
  ///
  /// Reads a configuration snapshot, sets the autofocus drive in it and
  /// pushes the snapshot back. Every failure along the way degrades to a
  /// logged warning: a camera without an autofocus drive must still be able
  /// to take a picture afterwards.
  pub fn autofocus(&self) {
    let config = match self.camera.config().wait() {
      Ok(config) => config,
      Err(err) => {
        warn!("🎯❌ could not read the camera configuration: {err}");
        return;
      }
    };

    let root: Widget = config.into();
    if !apply_or_warn(&root, AUTOFOCUS_DRIVE, &SettingValue::Int(1)) {
      // Nothing was assigned, so there is nothing to push.
      return;
    }

    match self.camera.set_config(&root).wait() {
      Ok(()) => info!("🎯 autofocus driven"),
      Err(err) => warn!("🎯❌ could not push the autofocus setting: {err}"),
    }
  }

  /// Captures a single image and downloads it into `dir`.
  ///
  /// The local file is named `<unix-timestamp>.jpg`, timestamped at the
  /// moment the capture is requested. The on-device copy is deleted once the
  /// transfer has succeeded; any failure in this sequence propagates.
  pub fn capture_to(&self, dir: &Path) -> Result<PathBuf> {
    info!("📸 capturing image");
    let timestamp = Utc::now().timestamp();

    let file = self.camera.capture_image().wait()?;
    let target = dir.join(format!("{timestamp}.jpg"));

    self.camera.fs().download_to(&file.folder(), &file.name(), &target).wait()?;
    info!("💾 saved image to {}", target.display());

    self.camera.fs().delete_file(&file.folder(), &file.name()).wait()?;
    info!("🗑 removed {} from the camera storage", file.name());

    Ok(target)
  }

  /// Text the camera reports about itself (model, settings, capabilities).
  pub fn describe(&self) -> Result<String> {
    self.camera.summary()
  }
}
