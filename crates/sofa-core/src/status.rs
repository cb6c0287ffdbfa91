//! Status events — system notifications about group and contact changes.
//!
//! A status event is not a user-authored chat message: it records that a
//! member left or was added, that the group was renamed, got a new photo,
//! or changed visibility. The decoder in `sofa-wire` produces these; the
//! renderer in [`crate::render`] turns them into display text.

use serde::{Deserialize, Serialize};

// ─── Event kind ──────────────────────────────────────────────────────────────

/// The closed set of recognised status event kinds.
///
/// [`Unknown`](Self::Unknown) is the fallback for any unrecognised or
/// missing wire `type`. It is not an error state — an unknown event simply
/// renders nothing.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum StatusKind {
  Left,
  Added,
  ChangedPhoto,
  Renamed,
  MadePublic,
  MadePrivate,
  #[default]
  Unknown,
}

impl StatusKind {
  /// Map a wire `type` value to a kind.
  ///
  /// Exact, case-sensitive match; any other value is [`Self::Unknown`].
  pub fn from_wire(token: &str) -> Self {
    match token {
      "leave" => Self::Left,
      "added" => Self::Added,
      "changePhoto" => Self::ChangedPhoto,
      "rename" => Self::Renamed,
      "setToPublic" => Self::MadePublic,
      "setToPrivate" => Self::MadePrivate,
      _ => Self::Unknown,
    }
  }

  /// The wire `type` value for this kind. `None` for [`Self::Unknown`],
  /// which has no wire representation.
  pub fn wire_name(self) -> Option<&'static str> {
    match self {
      Self::Left => Some("leave"),
      Self::Added => Some("added"),
      Self::ChangedPhoto => Some("changePhoto"),
      Self::Renamed => Some("rename"),
      Self::MadePublic => Some("setToPublic"),
      Self::MadePrivate => Some("setToPrivate"),
      Self::Unknown => None,
    }
  }
}

// ─── Event ───────────────────────────────────────────────────────────────────

/// The parsed result of one `SOFA::Status:` message.
///
/// Immutable after construction; built fresh per decode and discarded by
/// the caller after rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
  pub kind:    StatusKind,
  /// The primary actor — who performed the action. An event with no
  /// subject carries no renderable text, regardless of kind.
  pub subject: Option<String>,
  /// The secondary actor — who the action was performed on. Required by
  /// [`StatusKind::Added`] and [`StatusKind::Renamed`] only.
  pub object:  Option<String>,
}

impl StatusEvent {
  /// The ordered actor names a rendered sentence must mention.
  ///
  /// `None` means the event cannot be rendered: no subject, an
  /// `Added`/`Renamed` event without an object, or an `Unknown` kind.
  /// Callers treat that as "display nothing", never as an error.
  pub fn actors(&self) -> Option<Vec<&str>> {
    let subject = self.subject.as_deref()?;
    match self.kind {
      StatusKind::Left
      | StatusKind::ChangedPhoto
      | StatusKind::MadePublic
      | StatusKind::MadePrivate => Some(vec![subject]),
      StatusKind::Added | StatusKind::Renamed => {
        let object = self.object.as_deref()?;
        Some(vec![subject, object])
      }
      StatusKind::Unknown => None,
    }
  }
}
