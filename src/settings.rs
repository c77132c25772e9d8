//! Setting resolution and apply
//!
//! Translates a human-authored, slash-delimited path into a concrete node of
//! the camera's configuration tree and assigns it a new value. Not every
//! camera model exposes every setting, so an unresolvable path degrades to a
//! typed error the caller can log and move past.
//!
//! The assignment mutates the in-memory configuration snapshot only; pushing
//! the snapshot back to the camera is the caller's separate, explicit step.

use crate::error::SettingError;
use gphoto2::widget::Widget;
use std::fmt;
use tracing::warn;

/// A slash-delimited path into a configuration tree, e.g.
/// `/main/actions/autofocusdrive`.
///
/// Leading, trailing and duplicate slashes carry no meaning and are discarded
/// during parsing. A path with zero remaining segments is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingPath<'a> {
  raw: &'a str,
  segments: Vec<&'a str>,
}

impl<'a> SettingPath<'a> {
  /// Parses a raw path string.
  ///
  /// Fails with [`SettingError::InvalidPath`] when no non-empty segment
  /// remains after normalization.
  pub fn parse(raw: &'a str) -> Result<Self, SettingError> {
    let segments: Vec<&'a str> = raw.split('/').filter(|segment| !segment.is_empty()).collect();

    if segments.is_empty() {
      return Err(SettingError::InvalidPath { path: raw.to_owned() });
    }

    Ok(Self { raw, segments })
  }

  /// The normalized segments in traversal order. Never empty.
  pub fn segments(&self) -> &[&'a str] {
    &self.segments
  }

  /// The path as given by the caller.
  pub fn raw(&self) -> &'a str {
    self.raw
  }
}

/// Scalar value assignable to a configuration leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
  /// On/off state for toggle settings.
  Bool(bool),
  /// Integer value; accepted by toggle (nonzero means on), range and date
  /// settings.
  Int(i32),
  /// Floating point value for range settings.
  Float(f32),
  /// Text value; accepted by text and choice settings.
  Text(String),
}

impl fmt::Display for SettingValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Bool(value) => value.fmt(f),
      Self::Int(value) => value.fmt(f),
      Self::Float(value) => value.fmt(f),
      Self::Text(value) => f.write_str(value),
    }
  }
}

/// A node of a hierarchical configuration tree.
///
/// The seam between the resolver and the camera driver. The real tree is
/// [`gphoto2::widget::Widget`]; the unit tests use an in-memory tree so the
/// resolver can be exercised without hardware.
pub trait ConfigNode: Sized {
  /// Looks up the immediate child named `name`.
  fn child(&self, name: &str) -> gphoto2::Result<Self>;

  /// Assigns `value` to this node.
  fn set_value(&self, value: &SettingValue) -> gphoto2::Result<()>;
}

impl ConfigNode for Widget {
  fn child(&self, name: &str) -> gphoto2::Result<Self> {
    match self {
      Widget::Group(group) => group.get_child_by_name(name),
      _ => Err(gphoto2::Error::from(format!("{} is not a section", self.name()))),
    }
  }

  fn set_value(&self, value: &SettingValue) -> gphoto2::Result<()> {
    // The toggle, range and date setters only update the in-memory snapshot
    // and cannot fail; text and choice setters validate and can.
    match (self, value) {
      (Widget::Toggle(toggle), SettingValue::Bool(on)) => {
        toggle.set_toggled(*on);
        Ok(())
      }
      (Widget::Toggle(toggle), SettingValue::Int(raw)) => {
        toggle.set_toggled(*raw != 0);
        Ok(())
      }
      (Widget::Range(range), SettingValue::Float(raw)) => {
        range.set_value(*raw);
        Ok(())
      }
      (Widget::Range(range), SettingValue::Int(raw)) => {
        range.set_value(*raw as f32);
        Ok(())
      }
      (Widget::Text(text), SettingValue::Text(raw)) => text.set_value(raw),
      (Widget::Radio(radio), SettingValue::Text(raw)) => radio.set_choice(raw),
      (Widget::Date(date), SettingValue::Int(raw)) => {
        date.set_timestamp(*raw);
        Ok(())
      }
      _ => {
        Err(gphoto2::Error::from(format!("{} does not accept the value {value}", self.name())))
      }
    }
  }
}

/// Resolves `path` against `root` and assigns `value` at the resolved leaf.
///
/// Traversal is a strict sequential descent: every segment is looked up as a
/// child of the previous segment's node, so intermediate segments must name
/// section widgets. A path that does not resolve on the attached camera, or a
/// value the leaf rejects, yields [`SettingError::Unsupported`] and leaves
/// the tree untouched.
pub fn apply_setting<N: ConfigNode>(
  root: &N,
  path: &str,
  value: &SettingValue,
) -> Result<(), SettingError> {
  let path = SettingPath::parse(path)?;

  let unsupported =
    |source: gphoto2::Error| SettingError::Unsupported { path: path.raw().to_owned(), source };

  let [first, rest @ ..] = path.segments() else {
    return Err(SettingError::InvalidPath { path: path.raw().to_owned() });
  };

  let mut node = root.child(first).map_err(&unsupported)?;
  for segment in rest {
    node = node.child(segment).map_err(&unsupported)?;
  }

  node.set_value(value).map_err(&unsupported)
}

/// Applies a setting, absorbing both failure kinds with a logged warning.
///
/// Returns whether the value was assigned, so the caller knows if there is
/// anything to push back to the camera. A setting the attached model does not
/// support must never abort the surrounding action.
pub fn apply_or_warn<N: ConfigNode>(root: &N, path: &str, value: &SettingValue) -> bool {
  match apply_setting(root, path, value) {
    Ok(()) => true,
    Err(err @ SettingError::InvalidPath { .. }) => {
      warn!("{err}");
      false
    }
    Err(SettingError::Unsupported { path, source }) => {
      warn!(
        "could not set {path}: the camera may not support this setting \
         or the value is not valid for it (gphoto2 error: {source})"
      );
      false
    }
  }
}
