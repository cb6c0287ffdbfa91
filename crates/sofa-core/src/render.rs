//! Status text rendering — template substitution plus emphasis spans.
//!
//! The renderer owns no display strings of its own: the localised template
//! comes in through [`TemplateSource`], the actor names through the event.
//! The output is plain text plus the byte ranges the UI should emphasise
//! (typically: bold the actor names). Styling primitives stay in the UI
//! layer; this module never touches fonts or attributed strings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::status::{StatusEvent, StatusKind};

/// The positional placeholder token templates use for actor names.
pub const PLACEHOLDER: &str = "%@";

// ─── Output types ────────────────────────────────────────────────────────────

/// A span of [`RenderedStatus::text`] the UI must visually distinguish.
///
/// `start` and `len` are byte offsets into the UTF-8 text and always lie on
/// `char` boundaries (they come from [`str::find`] over substituted actor
/// strings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmphasisRange {
  pub start: usize,
  pub len:   usize,
}

impl EmphasisRange {
  /// One past the last byte of the span.
  pub fn end(self) -> usize {
    self.start + self.len
  }

  /// The span as a slice-compatible `Range`.
  pub fn as_range(self) -> std::ops::Range<usize> {
    self.start..self.end()
  }
}

/// A rendered status sentence: the text plus the spans covering the actor
/// names substituted into it, in substitution order.
///
/// Built fresh per [`render`] call, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedStatus {
  pub text:     String,
  pub emphasis: Vec<EmphasisRange>,
}

// ─── Template lookup ─────────────────────────────────────────────────────────

/// The injected localisation collaborator.
///
/// Maps an event kind to a format template containing one [`PLACEHOLDER`]
/// per actor the kind requires — subject first, then object. Returning
/// `None` means "no template for this kind in the current locale"; the
/// renderer then produces nothing rather than fabricate text.
pub trait TemplateSource {
  fn template(&self, kind: StatusKind) -> Option<&str>;
}

impl TemplateSource for HashMap<StatusKind, String> {
  fn template(&self, kind: StatusKind) -> Option<&str> {
    self.get(&kind).map(String::as_str)
  }
}

// ─── Renderer ────────────────────────────────────────────────────────────────

/// Render `event` through `templates` into text plus emphasis spans.
///
/// Returns `None` — meaning "display no status row", never an error — when:
/// - the event has no subject, or is [`StatusKind::Unknown`];
/// - the kind is `Added`/`Renamed` and the event has no object;
/// - `templates` has no template for the kind.
///
/// # Known limitation
///
/// Each emphasis span covers the *first* occurrence of its actor name in
/// the final sentence, scanning left to right. When an actor name also
/// appears in the template's fixed text, or when subject and object are
/// the same string, the span can land on the wrong occurrence. This
/// matches the long-standing behaviour of the producing apps and is kept
/// deliberately; no reconciliation pass is performed.
pub fn render(
  event: &StatusEvent,
  templates: &impl TemplateSource,
) -> Option<RenderedStatus> {
  let actors = event.actors()?;
  let template = templates.template(event.kind)?;
  let text = substitute(template, &actors);

  let emphasis = actors
    .iter()
    .filter_map(|actor| {
      text.find(*actor).map(|start| EmphasisRange {
        start,
        len: actor.len(),
      })
    })
    .collect();

  Some(RenderedStatus { text, emphasis })
}

/// Replace the first remaining [`PLACEHOLDER`] with each actor, in order.
/// Surplus placeholders are left verbatim (a template-contract violation,
/// not an error); surplus actors are dropped.
fn substitute(template: &str, actors: &[&str]) -> String {
  let mut out = String::with_capacity(template.len());
  let mut rest = template;
  for actor in actors {
    match rest.split_once(PLACEHOLDER) {
      Some((head, tail)) => {
        out.push_str(head);
        out.push_str(actor);
        rest = tail;
      }
      None => break,
    }
  }
  out.push_str(rest);
  out
}
