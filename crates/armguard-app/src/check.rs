//! The `check` use case: compile the template, evaluate policy, produce a report.

use anyhow::Context;
use armguard_domain::model::AbbreviationMap;
use armguard_settings::{ArmguardConfigV1, Overrides, ResolvedConfig};
use armguard_template::{TemplateCompiler, TemplateError};
use armguard_types::{ArmguardReport, Finding, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use camino::Utf8Path;
use time::OffsetDateTime;

/// Input for the check use case.
pub struct CheckInput<'a> {
    /// Bicep template (or precompiled ARM JSON) to validate.
    pub template: &'a Utf8Path,
    pub compiler: &'a dyn TemplateCompiler,
    /// Result of reading `armguard.toml`; `Ok(None)` if the file does not exist.
    pub config_text: Result<Option<String>, TemplateError>,
    /// Result of reading `abbreviations.json`; `Ok(None)` if the file does not exist.
    pub abbreviations_text: Result<Option<String>, TemplateError>,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Where an environment failure happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureStage {
    Compile,
    Config,
}

/// Typed result of a run. Exit codes are derived from this only at the process boundary.
#[derive(Clone, Debug)]
#[allow(clippy::large_enum_variant)]
pub enum Outcome {
    /// Evaluation ran and found nothing.
    Clean { report: ArmguardReport },
    /// Evaluation ran; `report.findings` holds the violations in aggregate order.
    ViolationsFound { report: ArmguardReport },
    /// The run could not evaluate anything.
    EnvironmentFailure { stage: FailureStage, reason: String },
}

impl Outcome {
    pub fn report(&self) -> Option<&ArmguardReport> {
        match self {
            Outcome::Clean { report } | Outcome::ViolationsFound { report } => Some(report),
            Outcome::EnvironmentFailure { .. } => None,
        }
    }

    pub fn findings(&self) -> &[Finding] {
        self.report().map(|r| r.findings.as_slice()).unwrap_or_default()
    }
}

/// Map an outcome to a process exit code: 0 = clean, 1 = violations or environment failure.
pub fn outcome_exit_code(outcome: &Outcome) -> i32 {
    match outcome {
        Outcome::Clean { .. } => 0,
        Outcome::ViolationsFound { .. } => 1,
        Outcome::EnvironmentFailure { .. } => 1,
    }
}

/// Run the check use case. Never fails: environment errors become [`Outcome::EnvironmentFailure`].
pub fn run_check(input: CheckInput<'_>) -> Outcome {
    let started_at = OffsetDateTime::now_utc();
    let CheckInput {
        template,
        compiler,
        config_text,
        abbreviations_text,
        overrides,
    } = input;

    let doc = match armguard_template::load_document(template, compiler) {
        Ok(doc) => doc,
        Err(err) => {
            let reason = format!("{:#}", anyhow::Error::new(err));
            tracing::error!(template = %template, %reason, "template compilation failed");
            return Outcome::EnvironmentFailure {
                stage: FailureStage::Compile,
                reason,
            };
        }
    };

    // Side files are only looked at once the template has compiled.
    let (resolved, abbreviations) = match load_policy(config_text, abbreviations_text, overrides) {
        Ok(v) => v,
        Err(err) => {
            let reason = format!("{err:#}");
            tracing::error!(%reason, "invalid configuration");
            return Outcome::EnvironmentFailure {
                stage: FailureStage::Config,
                reason,
            };
        }
    };

    let domain_report = armguard_domain::evaluate(&doc, &abbreviations, &resolved.effective);
    tracing::debug!(
        naming = domain_report.counts.naming,
        security = domain_report.counts.security,
        cost = domain_report.counts.cost,
        "evaluation finished"
    );

    let armguard_domain::report::DomainReport {
        verdict,
        findings,
        mut data,
        counts: _,
    } = domain_report;
    data.template = Some(template.to_string());

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "armguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        findings,
        data,
    };

    match report.verdict {
        Verdict::Pass => Outcome::Clean { report },
        Verdict::Fail => Outcome::ViolationsFound { report },
    }
}

fn load_policy(
    config_text: Result<Option<String>, TemplateError>,
    abbreviations_text: Result<Option<String>, TemplateError>,
    overrides: Overrides,
) -> anyhow::Result<(ResolvedConfig, AbbreviationMap)> {
    // Missing or blank config is allowed, defaults apply.
    let cfg = match config_text.context("read config")? {
        Some(text) if !text.trim().is_empty() => {
            armguard_settings::parse_config_toml(&text).context("parse config")?
        }
        _ => ArmguardConfigV1::default(),
    };
    let resolved =
        armguard_settings::resolve_config(cfg, overrides).context("resolve config")?;

    let abbreviations = match abbreviations_text.context("read abbreviations")? {
        Some(text) => {
            armguard_settings::parse_abbreviations_json(&text).context("parse abbreviations")?
        }
        None => {
            tracing::debug!("no abbreviations file; naming check has nothing to enforce");
            AbbreviationMap::new()
        }
    };

    Ok((resolved, abbreviations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use armguard_template::Compiler;
    use armguard_types::ids;
    use camino::Utf8PathBuf;

    struct Canned(&'static str);

    impl TemplateCompiler for Canned {
        fn compile(&self, _template: &Utf8Path) -> Result<String, TemplateError> {
            Ok(self.0.to_string())
        }
    }

    struct Broken;

    impl TemplateCompiler for Broken {
        fn compile(&self, _template: &Utf8Path) -> Result<String, TemplateError> {
            Err(TemplateError::CompilerFailed {
                status: Some(1),
                stderr: "Error BCP007: This declaration type is not recognized.".to_string(),
            })
        }
    }

    fn bicep_file() -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");
        let path = root.join("main.bicep");
        std::fs::write(&path, "// template").expect("write");
        (tmp, path)
    }

    fn input<'a>(
        template: &'a Utf8Path,
        compiler: &'a dyn TemplateCompiler,
        abbreviations_text: Option<&str>,
    ) -> CheckInput<'a> {
        CheckInput {
            template,
            compiler,
            config_text: Ok(None),
            abbreviations_text: Ok(abbreviations_text.map(str::to_string)),
            overrides: Overrides::default(),
        }
    }

    fn unreadable(name: &str) -> TemplateError {
        TemplateError::Read {
            path: Utf8PathBuf::from(name),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
    }

    const COMPLIANT: &str = r#"{"resources": [{
        "name": "appstorage",
        "type": "Microsoft.Storage/storageAccounts",
        "properties": {
            "supportsHttpsTrafficOnly": true,
            "encryption": {"services": {"blob": {"enabled": true}}}
        }
    }]}"#;

    const VIOLATING: &str = r#"{"resources": [
        {"name": "appstg", "type": "Microsoft.Storage/storageAccounts", "properties": {}},
        {"name": "vm", "type": "Microsoft.Compute/virtualMachines", "sku": {"name": "Standard_D4s_v3"}}
    ]}"#;

    #[test]
    fn compliant_template_is_clean() {
        let (_tmp, path) = bicep_file();
        let outcome = run_check(input(&path, &Canned(COMPLIANT), None));

        assert!(matches!(outcome, Outcome::Clean { .. }));
        assert_eq!(outcome_exit_code(&outcome), 0);
        let report = outcome.report().expect("report");
        assert_eq!(report.schema, SCHEMA_REPORT_V1);
        assert_eq!(report.data.profile, "strict");
        assert_eq!(report.data.template.as_deref(), Some(path.as_str()));
    }

    #[test]
    fn violations_keep_aggregate_order() {
        let (_tmp, path) = bicep_file();
        let outcome = run_check(input(
            &path,
            &Canned(VIOLATING),
            Some(r#"{"stg": "storage"}"#),
        ));

        assert!(matches!(outcome, Outcome::ViolationsFound { .. }));
        assert_eq!(outcome_exit_code(&outcome), 1);
        let messages: Vec<&str> = outcome.findings().iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Resource 'appstg': Use 'storage' instead of 'stg'",
                "Storage account should enforce HTTPS",
                "Storage account blob encryption not enabled",
                "Resource Microsoft.Compute/virtualMachines: Consider Standard_D2s_v3 for non-production",
            ]
        );
    }

    #[test]
    fn compiler_failure_stops_before_checks() {
        let (_tmp, path) = bicep_file();
        let outcome = run_check(input(&path, &Broken, None));

        match &outcome {
            Outcome::EnvironmentFailure { stage, reason } => {
                assert_eq!(*stage, FailureStage::Compile);
                assert!(reason.contains("BCP007"));
            }
            other => panic!("expected environment failure, got {other:?}"),
        }
        assert!(outcome.findings().is_empty());
        assert_eq!(outcome_exit_code(&outcome), 1);
    }

    #[test]
    fn missing_template_is_environment_failure() {
        let outcome = run_check(input(
            Utf8Path::new("nowhere/main.bicep"),
            &Compiler::AzCli,
            None,
        ));
        assert!(matches!(
            outcome,
            Outcome::EnvironmentFailure {
                stage: FailureStage::Compile,
                ..
            }
        ));
    }

    #[test]
    fn malformed_abbreviations_is_config_failure() {
        let (_tmp, path) = bicep_file();
        let outcome = run_check(input(&path, &Canned(COMPLIANT), Some("[1, 2]")));
        match outcome {
            Outcome::EnvironmentFailure { stage, reason } => {
                assert_eq!(stage, FailureStage::Config);
                assert!(reason.contains("parse abbreviations"));
            }
            other => panic!("expected config failure, got {other:?}"),
        }
    }

    #[test]
    fn config_can_disable_checks() {
        let (_tmp, path) = bicep_file();
        let mut inp = input(&path, &Canned(VIOLATING), Some(r#"{"stg": "storage"}"#));
        inp.config_text = Ok(Some("profile = \"security-only\"\n".to_string()));

        let outcome = run_check(inp);
        let check_ids: Vec<&str> = outcome.findings().iter().map(|f| f.check_id.as_str()).collect();
        assert_eq!(
            check_ids,
            vec![ids::CHECK_SECURITY_HARDENING, ids::CHECK_SECURITY_HARDENING]
        );
    }

    #[test]
    fn blank_config_uses_defaults() {
        let (_tmp, path) = bicep_file();
        let mut inp = input(&path, &Canned(COMPLIANT), None);
        inp.config_text = Ok(Some("   \n".to_string()));
        let outcome = run_check(inp);
        assert_eq!(outcome.report().expect("report").data.profile, "strict");
    }

    #[test]
    fn repeated_runs_produce_identical_findings() {
        let (_tmp, path) = bicep_file();
        let a = run_check(input(&path, &Canned(VIOLATING), Some(r#"{"vm": "virtualmachine"}"#)));
        let b = run_check(input(&path, &Canned(VIOLATING), Some(r#"{"vm": "virtualmachine"}"#)));
        assert_eq!(
            serde_json::to_string(a.findings()).expect("serialize"),
            serde_json::to_string(b.findings()).expect("serialize")
        );
    }

    #[test]
    fn unreadable_side_file_is_config_failure() {
        let (_tmp, path) = bicep_file();
        let mut inp = input(&path, &Canned(COMPLIANT), None);
        inp.abbreviations_text = Err(unreadable("abbreviations.json"));

        match run_check(inp) {
            Outcome::EnvironmentFailure { stage, reason } => {
                assert_eq!(stage, FailureStage::Config);
                assert!(reason.contains("read abbreviations"));
                assert!(reason.contains("denied"));
            }
            other => panic!("expected config failure, got {other:?}"),
        }
    }

    #[test]
    fn compile_failure_is_reported_before_unreadable_config() {
        let (_tmp, path) = bicep_file();
        let mut inp = input(&path, &Broken, None);
        inp.config_text = Err(unreadable("armguard.toml"));

        assert!(matches!(
            run_check(inp),
            Outcome::EnvironmentFailure {
                stage: FailureStage::Compile,
                ..
            }
        ));
    }
}
