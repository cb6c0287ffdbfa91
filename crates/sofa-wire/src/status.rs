//! Fail-soft decoder for `SOFA::Status:` bodies.
//!
//! Status bodies arrive from the network and feed straight into message
//! presentation, so the decoder must never fail the caller's control flow.
//! Every malformed shape degrades to an event that renders nothing:
//! unparseable JSON yields the all-absent event, an unrecognised `type`
//! yields [`StatusKind::Unknown`], and a non-string field value is treated
//! as absent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use sofa_core::{StatusEvent, StatusKind};

/// Lenient mirror of the wire object. Unknown keys are ignored; known keys
/// with non-string values decode as `None` instead of failing the document.
#[derive(Debug, Default, Deserialize)]
struct RawStatus {
  #[serde(default, rename = "type", deserialize_with = "string_or_none")]
  kind:    Option<String>,
  #[serde(default, deserialize_with = "string_or_none")]
  subject: Option<String>,
  #[serde(default, deserialize_with = "string_or_none")]
  object:  Option<String>,
}

/// Accept any JSON value, keeping it only if it is a string.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match Value::deserialize(deserializer)? {
    Value::String(s) => Some(s),
    _ => None,
  })
}

/// Decode one status body.
///
/// Infallible by contract: the worst case is an event with
/// [`StatusKind::Unknown`] and no actors, which renders nothing. Decode
/// misses are logged at debug level and never alter the result.
pub fn parse_status(raw: &str) -> StatusEvent {
  let raw_status: RawStatus = match serde_json::from_str(raw) {
    Ok(decoded) => decoded,
    Err(err) => {
      tracing::debug!(%err, "unparseable status body, producing empty event");
      RawStatus::default()
    }
  };

  let kind = match raw_status.kind.as_deref() {
    Some(token) => {
      let kind = StatusKind::from_wire(token);
      if kind == StatusKind::Unknown {
        tracing::debug!(token, "unrecognised status type");
      }
      kind
    }
    None => StatusKind::Unknown,
  };

  StatusEvent {
    kind,
    subject: raw_status.subject,
    object: raw_status.object,
  }
}
