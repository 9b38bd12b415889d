use camino::Utf8PathBuf;

/// Environment failures: the run stops before any check executes.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template not found: {0}")]
    TemplateNotFound(Utf8PathBuf),

    #[error("failed to read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", compiler_failed_message(.status, .stderr))]
    CompilerFailed { status: Option<i32>, stderr: String },

    #[error("compiler output is not valid UTF-8")]
    NonUtf8Output,

    #[error("compiled template is not valid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("compiled template is malformed: {0}")]
    Malformed(&'static str),
}

fn compiler_failed_message(status: &Option<i32>, stderr: &str) -> String {
    let status = status.map_or_else(|| "signal".to_string(), |c| c.to_string());
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("compiler exited with status {status}")
    } else {
        format!("compiler exited with status {status}: {stderr}")
    }
}
