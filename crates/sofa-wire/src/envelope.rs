//! The `SOFA::<Type>:<JSON>` text envelope.
//!
//! Every payload the messaging layer exchanges is one line of this shape.
//! This module recognises the envelope and hands out the raw JSON body;
//! only `Status` bodies get a typed decoder in this crate
//! ([`crate::parse_status`]) — the other variants are routed to their own
//! handlers by the caller.

use serde::{Deserialize, Serialize};
use sofa_core::StatusEvent;

use crate::{
  error::{Error, Result},
  status::parse_status,
};

/// The prefix every SOFA line starts with.
pub const SOFA_PREFIX: &str = "SOFA::";

// ─── Payload family ──────────────────────────────────────────────────────────

/// The SOFA payload family, by envelope type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SofaType {
  Message,
  Command,
  Init,
  InitRequest,
  PaymentRequest,
  Payment,
  Status,
}

impl SofaType {
  /// Exact match on the token between `SOFA::` and the body delimiter.
  pub fn from_token(token: &str) -> Option<Self> {
    match token {
      "Message" => Some(Self::Message),
      "Command" => Some(Self::Command),
      "Init" => Some(Self::Init),
      "InitRequest" => Some(Self::InitRequest),
      "PaymentRequest" => Some(Self::PaymentRequest),
      "Payment" => Some(Self::Payment),
      "Status" => Some(Self::Status),
      _ => None,
    }
  }

  pub fn token(self) -> &'static str {
    match self {
      Self::Message => "Message",
      Self::Command => "Command",
      Self::Init => "Init",
      Self::InitRequest => "InitRequest",
      Self::PaymentRequest => "PaymentRequest",
      Self::Payment => "Payment",
      Self::Status => "Status",
    }
  }
}

// ─── Envelope ────────────────────────────────────────────────────────────────

/// A recognised SOFA envelope, borrowing its JSON body from the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
  pub sofa_type: SofaType,
  /// The raw `<JSON>` portion, exactly as received. Not validated here;
  /// each payload decoder applies its own policy.
  pub body:      &'a str,
}

impl<'a> Envelope<'a> {
  /// Split `raw` into its type token and body. No allocation on success.
  pub fn parse(raw: &'a str) -> Result<Self> {
    let rest = raw.strip_prefix(SOFA_PREFIX).ok_or(Error::MissingPrefix)?;
    let (token, body) = rest.split_once(':').ok_or(Error::MissingBody)?;
    let sofa_type = SofaType::from_token(token)
      .ok_or_else(|| Error::UnknownType(token.to_string()))?;
    Ok(Self { sofa_type, body })
  }

  /// Decode the body as a status event, if this is a `Status` envelope.
  ///
  /// The decode itself is fail-soft: a garbled `Status` body still yields
  /// `Some(event)`, just one that renders nothing.
  pub fn status(&self) -> Option<StatusEvent> {
    (self.sofa_type == SofaType::Status).then(|| parse_status(self.body))
  }
}

#[cfg(test)]
mod tests {
  use sofa_core::StatusKind;

  use super::*;

  #[test]
  fn parses_a_status_envelope() {
    let line = r#"SOFA::Status:{"type":"leave","subject":"Robert"}"#;
    let envelope = Envelope::parse(line).unwrap();
    assert_eq!(envelope.sofa_type, SofaType::Status);
    assert_eq!(envelope.body, r#"{"type":"leave","subject":"Robert"}"#);
  }

  #[test]
  fn parses_every_known_type_token() {
    for sofa_type in [
      SofaType::Message,
      SofaType::Command,
      SofaType::Init,
      SofaType::InitRequest,
      SofaType::PaymentRequest,
      SofaType::Payment,
      SofaType::Status,
    ] {
      let line = format!("SOFA::{}:{{}}", sofa_type.token());
      let envelope = Envelope::parse(&line).unwrap();
      assert_eq!(envelope.sofa_type, sofa_type);
      assert_eq!(envelope.body, "{}");
    }
  }

  #[test]
  fn body_may_contain_colons() {
    let line = r#"SOFA::Message:{"body":"a:b:c"}"#;
    let envelope = Envelope::parse(line).unwrap();
    assert_eq!(envelope.body, r#"{"body":"a:b:c"}"#);
  }

  #[test]
  fn rejects_non_sofa_lines() {
    assert_eq!(Envelope::parse("hello"), Err(Error::MissingPrefix));
    assert_eq!(Envelope::parse(""), Err(Error::MissingPrefix));
    // Prefix match is exact, including case.
    assert_eq!(
      Envelope::parse("sofa::Status:{}"),
      Err(Error::MissingPrefix)
    );
  }

  #[test]
  fn rejects_unknown_type_tokens() {
    assert_eq!(
      Envelope::parse("SOFA::Frobnicate:{}"),
      Err(Error::UnknownType("Frobnicate".to_string()))
    );
    assert_eq!(
      Envelope::parse("SOFA::status:{}"),
      Err(Error::UnknownType("status".to_string()))
    );
  }

  #[test]
  fn rejects_envelopes_without_a_body_delimiter() {
    assert_eq!(Envelope::parse("SOFA::Status"), Err(Error::MissingBody));
  }

  #[test]
  fn status_accessor_only_decodes_status_envelopes() {
    let status = Envelope::parse(r#"SOFA::Status:{"type":"leave","subject":"Robert"}"#)
      .unwrap()
      .status()
      .unwrap();
    assert_eq!(status.kind, StatusKind::Left);
    assert_eq!(status.subject.as_deref(), Some("Robert"));

    let message = Envelope::parse(r#"SOFA::Message:{"body":"hi"}"#).unwrap();
    assert_eq!(message.status(), None);
  }
}
