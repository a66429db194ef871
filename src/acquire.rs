use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Local;

use crate::cleanup;
use crate::command;
use crate::config::RunConfig;
use crate::filename::ValidFilename;
use crate::layout::Layout;

const SCAN_ARGS: &[&str] = &["--mode", "Gray", "--resolution", "300", "--format=tiff"];
const RASTER_NAME: &str = "hscan_scan.tiff";
const REPORT_NAME: &str = "hscan_test.txt";

/// A document the run created; post-actions only act on one of these.
#[derive(Debug)]
pub struct Document {
    pub path: PathBuf,
}

pub fn acquire(config: &RunConfig, layout: &Layout, filename: &ValidFilename) -> Result<Document> {
    // Converted into temp first so a failed run leaves any previous document alone.
    let staged = layout.temp.join(&filename.name);

    if config.test_mode {
        let report = layout.temp.join(REPORT_NAME);
        std::fs::write(&report, diagnostic_report())
            .with_context(|| format!("Cannot write test report \"{}\"", report.display()))?;

        tracing::info!("Test mode: converting a diagnostic report instead of scanning");
        let input = format!("text:{}", report.display());
        convert(config, &[input.as_str()], &staged)?;
    } else {
        let raster = layout.temp.join(RASTER_NAME);
        scan(config, &raster)?;
        let input = raster.display().to_string();
        convert(config, &[input.as_str()], &staged)?;
    }

    let output_path = layout.output.join(&filename.name);
    if output_path.exists() {
        tracing::debug!("Replacing existing output file \"{}\"", output_path.display());
    }

    std::fs::rename(&staged, &output_path).with_context(|| {
        format!(
            "Cannot move \"{}\" to \"{}\"",
            staged.display(),
            output_path.display()
        )
    })?;

    tracing::info!("Document created: \"{}\"", output_path.display());

    Ok(Document { path: output_path })
}

fn scan(config: &RunConfig, raster: &Path) -> Result<()> {
    tracing::info!("Scanning...");

    let outcome = match command::run_to_file(&config.tools.scanner, SCAN_ARGS, raster) {
        Ok(outcome) => outcome,
        Err(err) => {
            cleanup::remove_partial_file(raster);
            return Err(err).context("Scan failed");
        }
    };

    if !outcome.success() {
        cleanup::remove_partial_file(raster);
        bail!(
            "Scan failed ({}): {}",
            outcome.status_text(),
            outcome.output.trim()
        );
    }

    Ok(())
}

pub fn convert(config: &RunConfig, inputs: &[&str], output: &Path) -> Result<()> {
    let output_arg = output.display().to_string();
    let mut args = inputs.to_vec();
    args.push(output_arg.as_str());

    let outcome = command::run(&config.tools.converter, &args)
        .context("Conversion failed")?;

    if !outcome.success() {
        bail!(
            "Conversion failed ({}): {}",
            outcome.status_text(),
            outcome.output.trim()
        );
    }

    if !output.is_file() {
        bail!(
            "Conversion reported success but \"{}\" was not created",
            output.display()
        );
    }

    Ok(())
}

pub fn diagnostic_report() -> String {
    format!(
        "hscan test page
===============
Timestamp: {timestamp}
Hostname:  {host}
User:      {user}
OS:        {os} ({arch})
Kernel:    {kernel}

{help}
",
        timestamp = Local::now().format("%Y-%m-%d %H:%M:%S %z"),
        host = hostname(),
        user = username(),
        os = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        kernel = kernel(),
        help = crate::cli::help_text(),
    )
}

fn hostname() -> String {
    std::env::var("HOSTNAME")
        .or_else(|_| std::env::var("HOST"))
        .or_else(|_| std::fs::read_to_string("/etc/hostname"))
        .map(|name| name.trim().to_string())
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn username() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}

fn kernel() -> String {
    match command::run("uname", &["-sr"]) {
        Ok(outcome) if outcome.success() => outcome.output.trim().to_string(),
        _ => "unknown".to_string(),
    }
}
