//! Rendering utilities for CI surfaces (terminal text, Markdown, GitHub annotations).

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod text;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFinding, RenderableReport, RenderableResource, RenderableVerdict,
};
pub use text::{CLEAN_MARKER, VIOLATIONS_HEADER, render_text};
