use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "shadesblue-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_shadesblue-tools"))
        .args(args)
        .output()
        .expect("run cli")
}

#[test]
fn cli_sitemap_lists_static_and_project_routes() {
    let output = run(&["--mode", "sitemap", "--date", "2026-10-18"]);
    assert!(output.status.success());
    let xml = String::from_utf8_lossy(&output.stdout);
    assert!(xml.contains("<loc>https://www.shadesblue.com</loc><lastmod>2026-10-18</lastmod>"));
    assert!(xml.contains("<loc>https://www.shadesblue.com/contact</loc>"));
    assert!(xml.contains("<loc>https://www.shadesblue.com/portfolio/afterschool-memphis</loc>"));
}

#[test]
fn cli_robots_respects_base_url() {
    let output = run(&["--mode", "robots", "--base-url", "https://staging.example.com/"]);
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("Sitemap: https://staging.example.com/sitemap.xml"));
}

#[test]
fn cli_bootstrap_writes_script_to_output_file() {
    let output_path = temp_path("bootstrap");
    let status = Command::new(env!("CARGO_BIN_EXE_shadesblue-tools"))
        .args(["--mode", "bootstrap", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let script = std::fs::read_to_string(output_path).expect("read output");
    assert!(script.contains("localStorage"));
    assert!(script.contains("a11y-high-contrast"));
}

#[test]
fn cli_audit_passes_on_embedded_catalog() {
    let output = run(&["--mode", "audit", "--report", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    let projects = value["projects"].as_array().expect("projects array");
    assert!(!projects.is_empty());
    assert!(projects.iter().all(|p| p["findings"].as_array().is_some_and(Vec::is_empty)));
}

#[test]
fn cli_audit_fails_on_broken_catalog() {
    let catalog_path = temp_path("catalog.json");
    std::fs::write(
        &catalog_path,
        r#"[{"slug":"Not Kebab","title":"T","role":"r","summary":"s"}]"#,
    )
    .expect("write catalog");
    let output = Command::new(env!("CARGO_BIN_EXE_shadesblue-tools"))
        .args(["--mode", "audit", "--report", "markdown", "--catalog"])
        .arg(&catalog_path)
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("slug-format"), "{text}");
    assert!(text.contains("- **Failed**: 1"));
}

#[test]
fn cli_reports_unreadable_catalog() {
    let output = run(&["--mode", "audit", "--catalog", "/nonexistent/catalog.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read catalog"), "{stderr}");
}
