//! SOFA text-envelope codec.
//!
//! Converts raw `SOFA::<Type>:<JSON>` lines into [`sofa_core`] domain
//! types. Pure synchronous; no HTTP, persistence, or UI dependencies.
//!
//! # Quick start
//!
//! ```
//! use sofa_wire::{Envelope, SofaType};
//!
//! let line = r#"SOFA::Status:{"type":"added","subject":"Marek","object":"Robert"}"#;
//! let envelope = Envelope::parse(line).unwrap();
//! assert_eq!(envelope.sofa_type, SofaType::Status);
//!
//! let event = envelope.status().unwrap();
//! assert_eq!(event.subject.as_deref(), Some("Marek"));
//! ```

pub mod envelope;
pub mod error;
mod status;

pub use envelope::{Envelope, SOFA_PREFIX, SofaType};
pub use error::{Error, Result};
pub use status::parse_status;

// ─── End-to-end tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod pipeline_tests {
  use std::collections::HashMap;

  use sofa_core::{EmphasisRange, StatusKind, render};

  use super::*;

  fn templates() -> HashMap<StatusKind, String> {
    HashMap::from([
      (StatusKind::Left, "%@ left".to_string()),
      (StatusKind::Added, "%@ added %@".to_string()),
    ])
  }

  #[test]
  fn raw_line_to_rendered_text() {
    let line =
      r#"SOFA::Status:{"type":"added","subject":"Marek","object":"Robert"}"#;
    let event = Envelope::parse(line).unwrap().status().unwrap();
    let rendered = render(&event, &templates()).unwrap();

    assert_eq!(rendered.text, "Marek added Robert");
    assert_eq!(rendered.emphasis, vec![
      EmphasisRange { start: 0, len: 5 },
      EmphasisRange { start: 12, len: 6 },
    ]);
  }

  #[test]
  fn garbled_status_line_renders_nothing_without_failing() {
    let event = Envelope::parse("SOFA::Status:garbage")
      .unwrap()
      .status()
      .unwrap();
    assert_eq!(event.kind, StatusKind::Unknown);
    assert_eq!(render(&event, &templates()), None);
  }
}
