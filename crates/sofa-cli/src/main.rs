//! `sofa` — inspect SOFA envelopes from the command line.
//!
//! Reads one envelope per line from its arguments (or stdin when none are
//! given), prints the classified type, and for `Status` envelopes the
//! parsed event plus the rendered sentence with its emphasis spans.
//!
//! # Usage
//!
//! ```
//! sofa 'SOFA::Status:{"type":"added","subject":"Marek","object":"Robert"}'
//! tail -f messages.log | sofa --json
//! sofa --templates pl.toml 'SOFA::Status:{"type":"leave","subject":"Marek"}'
//! ```
//!
//! The library crates deliberately ship no display strings; this binary is
//! a caller like any other and brings its own English table, overridable
//! per kind with `--templates` (a TOML file of `added = "%@ added %@"`
//! entries).

use std::{
  collections::HashMap,
  io::BufRead,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use sofa_core::{RenderedStatus, StatusEvent, StatusKind, render};
use sofa_wire::{Envelope, SofaType};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "sofa", about = "Inspect SOFA envelopes")]
struct Args {
  /// Raw SOFA lines; read from stdin (one per line) when empty.
  lines: Vec<String>,

  /// TOML file of per-kind template overrides.
  #[arg(long, value_name = "FILE")]
  templates: Option<PathBuf>,

  /// Emit one JSON object per line instead of human-readable text.
  #[arg(long)]
  json: bool,
}

// ─── Report ──────────────────────────────────────────────────────────────────

/// Everything the inspector learned about one input line.
#[derive(Serialize)]
struct Report<'a> {
  line:      &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  sofa_type: Option<SofaType>,
  #[serde(skip_serializing_if = "Option::is_none")]
  error:     Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  event:     Option<StatusEvent>,
  #[serde(skip_serializing_if = "Option::is_none")]
  rendered:  Option<RenderedStatus>,
}

fn inspect<'a>(
  line: &'a str,
  templates: &HashMap<StatusKind, String>,
) -> Report<'a> {
  match Envelope::parse(line) {
    Err(err) => Report {
      line,
      sofa_type: None,
      error: Some(err.to_string()),
      event: None,
      rendered: None,
    },
    Ok(envelope) => {
      let event = envelope.status();
      let rendered = event.as_ref().and_then(|event| render(event, templates));
      Report {
        line,
        sofa_type: Some(envelope.sofa_type),
        error: None,
        event,
        rendered,
      }
    }
  }
}

fn print_human(report: &Report) {
  if let Some(error) = &report.error {
    println!("error: {error}");
    return;
  }
  let Some(sofa_type) = report.sofa_type else {
    return;
  };
  println!("SOFA::{}", sofa_type.token());
  if let Some(event) = &report.event {
    println!(
      "  kind={:?} subject={:?} object={:?}",
      event.kind, event.subject, event.object
    );
    match &report.rendered {
      Some(rendered) => {
        let spans: Vec<String> = rendered
          .emphasis
          .iter()
          .map(|range| format!("{}..{}", range.start, range.end()))
          .collect();
        println!("  \"{}\"  emphasis: {}", rendered.text, spans.join(", "));
      }
      None => println!("  (renders nothing)"),
    }
  }
}

// ─── Templates ───────────────────────────────────────────────────────────────

/// The built-in English table.
fn english_templates() -> HashMap<StatusKind, String> {
  HashMap::from([
    (StatusKind::Left, "%@ left the group".to_string()),
    (StatusKind::Added, "%@ added %@".to_string()),
    (StatusKind::ChangedPhoto, "%@ changed the group photo".to_string()),
    (StatusKind::Renamed, "%@ renamed the group to %@".to_string()),
    (StatusKind::MadePublic, "%@ made the group public".to_string()),
    (StatusKind::MadePrivate, "%@ made the group private".to_string()),
  ])
}

/// The English table, overlaid with the `--templates` file if given. Keys
/// are the kind names (`left`, `added`, `changedPhoto`, …).
fn load_templates(path: Option<&Path>) -> Result<HashMap<StatusKind, String>> {
  let mut templates = english_templates();
  if let Some(path) = path {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading template file {}", path.display()))?;
    let overrides: HashMap<String, String> =
      toml::from_str(&raw).context("parsing template file")?;
    tracing::debug!(count = overrides.len(), "applying template overrides");
    for (key, template) in overrides {
      let kind: StatusKind =
        serde_json::from_value(serde_json::Value::String(key.clone()))
          .with_context(|| format!("unknown status kind `{key}`"))?;
      templates.insert(kind, template);
    }
  }
  Ok(templates)
}

// ─── Entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();
  let templates = load_templates(args.templates.as_deref())?;

  let lines: Vec<String> = if args.lines.is_empty() {
    std::io::stdin()
      .lock()
      .lines()
      .collect::<std::io::Result<_>>()
      .context("reading stdin")?
  } else {
    args.lines
  };

  for line in &lines {
    let report = inspect(line, &templates);
    if args.json {
      println!("{}", serde_json::to_string(&report)?);
    } else {
      print_human(&report);
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn inspect_reports_a_rendered_status() {
    let line =
      r#"SOFA::Status:{"type":"added","subject":"Marek","object":"Robert"}"#;
    let report = inspect(line, &english_templates());
    assert_eq!(report.sofa_type, Some(SofaType::Status));
    assert_eq!(report.rendered.unwrap().text, "Marek added Robert");
  }

  #[test]
  fn inspect_reports_envelope_errors() {
    let report = inspect("not sofa at all", &english_templates());
    assert!(report.error.is_some());
    assert_eq!(report.sofa_type, None);
  }

  #[test]
  fn inspect_passes_non_status_envelopes_through() {
    let report =
      inspect(r#"SOFA::Message:{"body":"hi"}"#, &english_templates());
    assert_eq!(report.sofa_type, Some(SofaType::Message));
    assert!(report.event.is_none());
    assert!(report.rendered.is_none());
  }

  #[test]
  fn template_overrides_replace_single_kinds() {
    let dir = std::env::temp_dir();
    let path = dir.join("sofa-cli-test-templates.toml");
    std::fs::write(&path, "left = \"%@ wyszedł\"\n").unwrap();

    let templates = load_templates(Some(&path)).unwrap();
    assert_eq!(
      templates.get(&StatusKind::Left).map(String::as_str),
      Some("%@ wyszedł")
    );
    // Untouched kinds keep the English defaults.
    assert_eq!(
      templates.get(&StatusKind::Added).map(String::as_str),
      Some("%@ added %@")
    );

    std::fs::remove_file(&path).ok();
  }
}
