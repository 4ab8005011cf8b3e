use std::io::Read;
use std::path::Path;

use anyhow::Context;
use insight_config::{InsightConfig, ValidationConfig};
use insight_core::{CheckReport, ShapeMode, ShapePolicy};
use serde_json::Value;

use crate::cli::{CheckArgs, GlobalFlags};
use crate::output::output;

/// Handle `insight check`. Returns whether the document is an insight.
pub fn handle(args: &CheckArgs, flags: &GlobalFlags, config: &InsightConfig) -> anyhow::Result<bool> {
    let policy = effective_policy(args, &config.validation)?;
    let value = read_document(args.file.as_deref())?;

    let report = evaluate(&value, &policy);
    output(&report, flags.format, config.general.pretty)?;
    Ok(report.valid)
}

/// Merge command-line overrides into the configured validation section.
fn effective_policy(args: &CheckArgs, configured: &ValidationConfig) -> anyhow::Result<ShapePolicy> {
    let mut validation = configured.clone();
    if args.strict {
        validation.mode = ShapeMode::Closed;
    }
    validation.allowed_kinds.extend(args.kinds.iter().cloned());
    validation.validate()?;
    Ok(validation.policy())
}

/// Read one JSON document from `path`, or stdin when `path` is absent or `-`.
fn read_document(path: Option<&Path>) -> anyhow::Result<Value> {
    let (source, raw) = match path {
        Some(path) if path != Path::new("-") => (
            path.display().to_string(),
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read '{}'", path.display()))?,
        ),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            ("<stdin>".to_string(), raw)
        }
    };

    serde_json::from_str(&raw).with_context(|| format!("{source} is not valid JSON"))
}

fn evaluate(value: &Value, policy: &ShapePolicy) -> CheckReport {
    let outcome = policy.check(value);
    if let Err(violation) = &outcome {
        tracing::debug!(rule = violation.rule(), %violation, "document rejected");
    }
    CheckReport::new(value, &outcome)
}
