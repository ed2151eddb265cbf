use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use crate::audit::AuditReport;

pub fn write_console_report(out: &mut dyn Write, report: &AuditReport) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📋 Content Audit Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "========================".cyan())?;

    let total = report.projects.len();
    let failed = report.failed_count();
    writeln!(out, "Projects checked: {total}")?;
    writeln!(out, "Passed: {}", (total - failed).to_string().green())?;
    writeln!(out, "Failed: {}", failed.to_string().red())?;
    writeln!(out)?;

    for project in &report.projects {
        let status = if project.passed() {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(out, "{status} {} ({})", project.slug.bold(), project.title)?;
        for finding in &project.findings {
            writeln!(
                out,
                "     • [{}] {}",
                finding.check.as_str(),
                finding.message.red()
            )?;
        }
    }
    Ok(())
}

pub fn write_json_report(out: &mut dyn Write, report: &AuditReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_markdown_report(out: &mut dyn Write, report: &AuditReport) -> Result<()> {
    writeln!(out, "# Shadesblue Content Audit\n")?;

    let total = report.projects.len();
    let failed = report.failed_count();
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Projects checked**: {total}")?;
    writeln!(out, "- **Passed**: {}", total - failed)?;
    writeln!(out, "- **Failed**: {failed}\n")?;

    writeln!(out, "## Projects\n")?;
    writeln!(out, "| Status | Slug | Findings |")?;
    writeln!(out, "|---|---|---|")?;
    for project in &report.projects {
        let status = if project.passed() { "✅" } else { "❌" };
        let findings = if project.findings.is_empty() {
            "-".to_string()
        } else {
            project
                .findings
                .iter()
                .map(|f| format!("{}: {}", f.check.as_str(), f.message.replace('|', "\\|")))
                .collect::<Vec<_>>()
                .join("<br>")
        };
        writeln!(out, "| {status} | `{}` | {findings} |", project.slug)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::audit_catalog;
    use shadesblue_core::Catalog;

    fn failing_report() -> AuditReport {
        let catalog = Catalog::from_json(r#"[{"slug":"ok-slug","title":"T","role":"r"}]"#)
            .expect("catalog");
        audit_catalog(&catalog)
    }

    #[test]
    fn markdown_lists_findings_per_project() {
        let mut buf = Vec::new();
        write_markdown_report(&mut buf, &failing_report()).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("- **Failed**: 1"));
        assert!(text.contains("| ❌ | `ok-slug` |"));
        assert!(text.contains("hero: no hero image"));
    }

    #[test]
    fn json_report_uses_kebab_case_checks() {
        let mut buf = Vec::new();
        write_json_report(&mut buf, &failing_report()).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("json");
        let first = &value["projects"][0];
        assert_eq!(first["slug"], "ok-slug");
        assert_eq!(first["findings"][0]["check"], "summary");
    }

    #[test]
    fn console_report_marks_passing_projects() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        write_console_report(&mut buf, &audit_catalog(Catalog::embedded())).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.contains("✅ PASS afterschool-memphis"));
        assert!(text.contains("Failed: 0"));
    }
}
