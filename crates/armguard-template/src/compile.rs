use crate::error::TemplateError;
use camino::Utf8Path;
use std::process::Command;

/// Turns a template file into ARM JSON text.
pub trait TemplateCompiler {
    fn compile(&self, template: &Utf8Path) -> Result<String, TemplateError>;
}

/// Built-in compiler front-ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Compiler {
    /// `az bicep build --file <template> --stdout`
    #[default]
    AzCli,
    /// `bicep build <template> --stdout`
    Bicep,
}

impl Compiler {
    pub fn parse(v: &str) -> Option<Self> {
        match v {
            "az" => Some(Self::AzCli),
            "bicep" => Some(Self::Bicep),
            _ => None,
        }
    }

    pub fn command(self) -> CommandCompiler {
        match self {
            Self::AzCli => CommandCompiler::new("az", ["bicep", "build"]).with_file_flag("--file"),
            Self::Bicep => CommandCompiler::new("bicep", ["build"]),
        }
    }
}

impl TemplateCompiler for Compiler {
    fn compile(&self, template: &Utf8Path) -> Result<String, TemplateError> {
        self.command().compile(template)
    }
}

/// Runs an external program and captures the compiled template from stdout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandCompiler {
    program: String,
    args: Vec<String>,
    file_flag: Option<String>,
}

impl CommandCompiler {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            file_flag: None,
        }
    }

    pub fn with_file_flag(mut self, flag: impl Into<String>) -> Self {
        self.file_flag = Some(flag.into());
        self
    }

    /// Full argument list for `template`, ending in `--stdout`.
    pub fn args_for(&self, template: &Utf8Path) -> Vec<String> {
        let mut args = self.args.clone();
        if let Some(flag) = &self.file_flag {
            args.push(flag.clone());
        }
        args.push(template.to_string());
        args.push("--stdout".to_string());
        args
    }
}

impl TemplateCompiler for CommandCompiler {
    fn compile(&self, template: &Utf8Path) -> Result<String, TemplateError> {
        let args = self.args_for(template);
        tracing::info!(program = %self.program, ?args, "compiling template");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| TemplateError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(TemplateError::CompilerFailed {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| TemplateError::NonUtf8Output)
    }
}

/// Produce ARM JSON for `template`.
///
/// `.json` templates are taken as already compiled and read as-is; anything else goes
/// through `compiler`.
pub fn compile_template(
    template: &Utf8Path,
    compiler: &dyn TemplateCompiler,
) -> Result<String, TemplateError> {
    if !template.is_file() {
        return Err(TemplateError::TemplateNotFound(template.to_owned()));
    }

    if template.extension() == Some("json") {
        tracing::info!(template = %template, "reading precompiled template");
        return std::fs::read_to_string(template).map_err(|source| TemplateError::Read {
            path: template.to_owned(),
            source,
        });
    }

    compiler.compile(template)
}
