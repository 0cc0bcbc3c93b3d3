//! adfmt: generate apiDoc stub classes from JSON endpoint manifests.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `adfmt < users.json` prints the generated source
//! - **file mode**: `adfmt -o docs/api manifests/*.json` writes one
//!   `<unit>.py` per manifest, or prints them all without `-o`

use adfmt::{DocUnit, Explanations, Manifest};
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "adfmt",
    about = "Generate apiDoc annotation stubs from example request/response payloads"
)]
struct Cli {
    /// Manifest files (glob patterns and directories supported). If omitted, reads one manifest from stdin.
    files: Vec<String>,

    /// Output directory for generated `<unit>.py` files. Prints to stdout when omitted.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// JSON object of field explanations, applied over each manifest's own
    #[arg(short = 'e', long)]
    explain: Option<PathBuf>,

    /// Log debug detail to stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let overrides = load_explanations(cli.explain.as_deref())?;

    if cli.files.is_empty() {
        return stdin_mode(&cli, &overrides);
    }

    file_mode(&cli, &overrides)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_explanations(path: Option<&Path>) -> Result<Explanations> {
    let Some(path) = path else {
        return Ok(Explanations::new());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read explanations: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid explanations file: {}", path.display()))
}

/// stdin mode: one manifest in, its generated source out.
fn stdin_mode(cli: &Cli, overrides: &Explanations) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let unit = build_unit(&input, overrides).context("invalid manifest on stdin")?;
    emit(cli, &[unit])
}

/// file mode: every manifest becomes one unit.
fn file_mode(cli: &Cli, overrides: &Explanations) -> Result<()> {
    let input_files = expand_globs(&cli.files)?;

    let mut units = Vec::new();
    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let unit = build_unit(&content, overrides)
            .with_context(|| format!("invalid manifest: {}", path.display()))?;
        info!(manifest = %path.display(), unit = unit.name(), blocks = unit.len(), "loaded manifest");
        units.push(unit);
    }

    emit(cli, &units)
}

fn build_unit(text: &str, overrides: &Explanations) -> adfmt::Result<DocUnit> {
    Manifest::from_json(text)?.into_unit(overrides)
}

fn emit(cli: &Cli, units: &[DocUnit]) -> Result<()> {
    let Some(output_dir) = cli.output.as_deref() else {
        let sources: Vec<String> = units.iter().map(DocUnit::source).collect();
        print!("{}", sources.join("\n"));
        return Ok(());
    };

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let mut written: Vec<&str> = Vec::new();
    for unit in units {
        if written.contains(&unit.name()) {
            warn!(unit = unit.name(), "several manifests share this unit name; the last one wins");
        }
        unit.write_on(output_dir)
            .with_context(|| format!("failed to write unit {}", unit.name()))?;
        written.push(unit.name());
    }
    Ok(())
}

/// File extensions recognized as manifests.
const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for manifests.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // Directory: scan for manifests (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                let supported = p
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext));
                if p.is_file() && supported {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!(pattern = %pattern, "no files matched");
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}
