//! Use case orchestration for armguard.
//!
//! This crate provides the application layer: use cases that coordinate the template, settings,
//! domain, and render layers. It is intentionally thin and delegates heavy lifting to the
//! appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing, I/O, and exit codes.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod report;

pub use check::{CheckInput, FailureStage, Outcome, outcome_exit_code, run_check};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use report::{
    SchemaKind, json_schema, render_annotations, render_markdown, render_text, serialize_report,
    to_renderable,
};
