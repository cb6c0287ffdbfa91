//! Error types for the SOFA envelope codec.
//!
//! Only envelope recognition has typed failures — message routing branches
//! on them. Status-body decoding is fail-soft and never returns an error;
//! see [`crate::parse_status`].

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("not a SOFA envelope (missing `SOFA::` prefix)")]
  MissingPrefix,

  #[error("unknown SOFA type: {0}")]
  UnknownType(String),

  #[error("SOFA envelope has no `:` delimiter after its type")]
  MissingBody,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
