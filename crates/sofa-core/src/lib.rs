//! Core types and rendering logic for SOFA status events.
//!
//! This crate is deliberately free of wire-format and I/O dependencies.
//! `sofa-wire` decodes raw envelopes into these types; UI layers consume
//! them and apply their own rich-text primitives to the emphasis spans.
//!
//! # Quick start
//!
//! ```
//! use std::collections::HashMap;
//! use sofa_core::{StatusEvent, StatusKind, render};
//!
//! let event = StatusEvent {
//!   kind:    StatusKind::Left,
//!   subject: Some("Robert".to_string()),
//!   object:  None,
//! };
//! let templates = HashMap::from([(StatusKind::Left, "%@ left".to_string())]);
//!
//! let rendered = render(&event, &templates).unwrap();
//! assert_eq!(rendered.text, "Robert left");
//! assert_eq!(&rendered.text[rendered.emphasis[0].as_range()], "Robert");
//! ```

pub mod render;
pub mod status;

pub use render::{EmphasisRange, RenderedStatus, TemplateSource, render};
pub use status::{StatusEvent, StatusKind};
