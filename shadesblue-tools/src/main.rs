mod audit;
mod reports;
mod seo;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use shadesblue_core::config::SITE_URL;
use shadesblue_core::{Catalog, bootstrap_script};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Mode {
    /// Emit sitemap.xml for the static routes and every project
    Sitemap,
    /// Emit robots.txt
    Robots,
    /// Emit the inline pre-paint script for the host page
    Bootstrap,
    /// Check the project catalog for missing or malformed content
    Audit,
}

#[derive(Debug, Parser)]
#[command(name = "shadesblue-tools", version)]
#[command(about = "Static output and content audits for the Shadesblue site")]
struct Args {
    /// What to generate or check
    #[arg(long, value_enum, default_value_t = Mode::Audit)]
    mode: Mode,

    /// Canonical site origin used in sitemap and robots output
    #[arg(long, default_value = SITE_URL)]
    base_url: String,

    /// Audit report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json", "markdown"])]
    report: String,

    /// Project catalog JSON to use instead of the embedded one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Date stamped on static sitemap routes (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Optional path to write the output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let catalog = load_catalog(args.catalog.as_deref())?;
    let mut output_target = OutputTarget::new(args.output.clone())?;

    let passed = match args.mode {
        Mode::Sitemap => {
            let today = args.date.unwrap_or_else(|| Local::now().date_naive());
            let xml = seo::sitemap_xml(&args.base_url, &catalog, today);
            output_target.writer().write_all(xml.as_bytes())?;
            true
        }
        Mode::Robots => {
            let robots = seo::robots_txt(&args.base_url);
            output_target.writer().write_all(robots.as_bytes())?;
            true
        }
        Mode::Bootstrap => {
            writeln!(output_target.writer(), "{}", bootstrap_script())?;
            true
        }
        Mode::Audit => {
            let report = audit::audit_catalog(&catalog);
            match args.report.as_str() {
                "json" => reports::write_json_report(output_target.writer(), &report)?,
                "markdown" => reports::write_markdown_report(output_target.writer(), &report)?,
                _ => reports::write_console_report(output_target.writer(), &report)?,
            }
            if !report.passed() {
                log::warn!("{} project(s) failed the content audit", report.failed_count());
            }
            report.passed()
        }
    };

    output_target.flush_inner()?;
    if let Some(path) = args.output.as_ref() {
        eprintln!("{} {}", "✏️  Wrote".green(), path.display());
    }

    if !passed {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::embedded().clone());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog = Catalog::from_json(&json)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;
    log::debug!("loaded {} project(s) from {}", catalog.len(), path.display());
    Ok(catalog)
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::Stdout(BufWriter::new(stdout())));
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let file =
            File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Self::File(BufWriter::new(file)))
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
