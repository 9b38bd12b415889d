//! Template adapters: compile Bicep templates to ARM JSON and parse the result.
//!
//! This crate is allowed to do filesystem IO and spawn the external compiler. The domain
//! crate only ever sees the parsed [`ResourceDocument`].

#![forbid(unsafe_code)]

mod compile;
mod error;
mod parse;

use camino::Utf8Path;

pub use armguard_domain::model::ResourceDocument;
pub use compile::{CommandCompiler, Compiler, TemplateCompiler, compile_template};
pub use error::TemplateError;
pub use parse::parse_document;

/// Compile `template` (or read it, if it is already ARM JSON) and parse the resource document.
pub fn load_document(
    template: &Utf8Path,
    compiler: &dyn TemplateCompiler,
) -> Result<ResourceDocument, TemplateError> {
    let json = compile_template(template, compiler)?;
    let doc = parse_document(&json)?;
    tracing::debug!(template = %template, resources = doc.len(), "parsed resource document");
    Ok(doc)
}

/// Read a side file such as `abbreviations.json` or `armguard.toml`.
///
/// A missing file is `Ok(None)`; any other IO failure is an error.
pub fn read_optional(path: &Utf8Path) -> Result<Option<String>, TemplateError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path, "optional file not found");
            Ok(None)
        }
        Err(source) => Err(TemplateError::Read {
            path: path.to_owned(),
            source,
        }),
    }
}
