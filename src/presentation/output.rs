//! Output Rendering
//!
//! Text and JSON renderings of check results and build reports. Progress
//! during a build goes through the event sinks instead.

use crate::application::{BuildReport, CheckResult, CheckStatus};

/// Icons for output rendering
struct Icons {
    check: &'static str,
    warn: &'static str,
    cross: &'static str,
}

impl Icons {
    fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                check: "✓",
                warn: "⚠",
                cross: "✗",
            }
        } else {
            Self {
                check: "[OK]",
                warn: "[WARN]",
                cross: "[FAIL]",
            }
        }
    }
}

/// One line per check plus a summary line
pub fn render_check_text(result: &CheckResult, unicode: bool) -> String {
    let icons = Icons::new(unicode);
    let mut out = String::new();

    for item in &result.items {
        let icon = match item.status {
            CheckStatus::Pass => icons.check,
            CheckStatus::Warning => icons.warn,
            CheckStatus::Error => icons.cross,
        };
        out.push_str(&format!("{} {:<11} {}\n", icon, item.name, item.message));
    }

    out.push_str(&format!(
        "\n{} passed, {} warnings, {} errors\n",
        result.passed, result.warnings, result.errors
    ));
    out
}

pub fn check_result_json(result: &CheckResult) -> serde_json::Value {
    let items: Vec<_> = result
        .items
        .iter()
        .map(|item| {
            serde_json::json!({
                "name": item.name,
                "status": match item.status {
                    CheckStatus::Pass => "pass",
                    CheckStatus::Warning => "warning",
                    CheckStatus::Error => "error",
                },
                "message": item.message,
            })
        })
        .collect();

    serde_json::json!({
        "event": "check",
        "success": result.is_success(),
        "passed": result.passed,
        "warnings": result.warnings,
        "errors": result.errors,
        "items": items,
    })
}

/// Final NDJSON record of a successful build
pub fn build_report_json(report: &BuildReport) -> serde_json::Value {
    let files: Vec<_> = report
        .files
        .iter()
        .map(|file| {
            serde_json::json!({
                "path": slash_path(&file.path),
                "hash": file.hash,
            })
        })
        .collect();
    let removed: Vec<_> = report.removed.iter().map(|p| slash_path(p)).collect();

    serde_json::json!({
        "event": "report",
        "files": files,
        "removed": removed,
        "warnings": report.warnings,
    })
}

fn slash_path(path: &std::path::Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
