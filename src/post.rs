use std::path::Path;

use anyhow::{Context, Result};

use crate::acquire::{self, Document};
use crate::command::{self, CommandOutcome};
use crate::config::RunConfig;

const NO_DEFAULT_DESTINATION: &str = "no default destination";
const BLANK_PAGE_NAME: &str = "hscan_blank.pdf";

/// Opens the output directory and the document. Failures are logged only.
pub fn open_document(config: &RunConfig, output_dir: &Path, document: &Document) {
    if !document.path.is_file() {
        tracing::error!(
            "Cannot open \"{}\": file not found",
            document.path.display()
        );
        return;
    }

    for target in [output_dir, document.path.as_path()] {
        let arg = target.display().to_string();
        if let Err(err) = command::spawn_detached(&config.tools.opener, &[arg.as_str()]) {
            tracing::debug!("Opener failed: {err}");
        }
    }
}

/// Sends the document, or a generated blank page, to the spooler. Failures
/// are logged only.
pub fn print_document(config: &RunConfig, document: &Document) {
    let result = if config.print_blank {
        print_blank_page(config)
    } else {
        spool(config, &document.path)
    };

    if let Err(err) = result {
        tracing::error!("Printing failed: {err:#}");
    }
}

fn print_blank_page(config: &RunConfig) -> Result<()> {
    let dir = tempfile::Builder::new()
        .prefix("hscan-blank-")
        .tempdir()
        .context("Cannot create a directory for the blank page")?;
    let blank = dir.path().join(BLANK_PAGE_NAME);

    acquire::convert(config, &["xc:white", "-page", "A4"], &blank)
        .context("Cannot generate blank page")?;

    spool(config, &blank)
}

fn spool(config: &RunConfig, file: &Path) -> Result<()> {
    let arg = file.display().to_string();
    let outcome = command::run(&config.tools.spooler, &[arg.as_str()])?;

    if outcome.success() {
        tracing::info!("Sent \"{}\" to the printer", file.display());
        return Ok(());
    }

    report_spool_failure(&outcome);
    Ok(())
}

fn report_spool_failure(outcome: &CommandOutcome) {
    tracing::error!("Print command failed ({})", outcome.status_text());

    let output = outcome.output.trim();
    if !output.is_empty() {
        tracing::error!("{output}");
    }

    if needs_default_printer(output) {
        tracing::warn!(
            "No default printer is configured. List printers with `lpstat -p` and set one with `lpoptions -d <printer>`."
        );
    }
}

pub fn needs_default_printer(output: &str) -> bool {
    output.to_ascii_lowercase().contains(NO_DEFAULT_DESTINATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_missing_default_destination() {
        assert!(needs_default_printer(
            "lp: Error - No default destination."
        ));
        assert!(needs_default_printer("lp: error - no default destination"));
        assert!(!needs_default_printer("lp: The printer or class does not exist."));
    }
}
