use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local};

use crate::config::RunConfig;
use crate::filename::{self, ValidFilename};

const AUTO_NAME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

pub fn resolve_filename(config: &RunConfig) -> Result<ValidFilename> {
    if config.auto_name {
        let name = auto_name(Local::now());
        tracing::debug!("Using generated filename \"{name}\"");
        return filename::validate(&name)
            .with_context(|| format!("Generated filename \"{name}\" is invalid"));
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    prompt_filename(&mut stdin.lock(), &mut stdout.lock())
}

pub fn auto_name(now: DateTime<Local>) -> String {
    format!("{}.pdf", now.format(AUTO_NAME_FORMAT))
}

/// Asks for a filename until one passes validation.
///
/// Input is taken verbatim apart from the line terminator, so surrounding
/// whitespace is reported instead of silently trimmed.
pub fn prompt_filename(input: &mut impl BufRead, output: &mut impl Write) -> Result<ValidFilename> {
    let mut line = String::new();

    loop {
        write!(output, "Enter a filename (e.g. scan.pdf): ")?;
        output.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read filename from stdin")?;

        if read == 0 {
            bail!("Input closed before a valid filename was entered");
        }

        let candidate = line.strip_suffix('\n').unwrap_or(&line);
        let candidate = candidate.strip_suffix('\r').unwrap_or(candidate);

        match filename::validate(candidate) {
            Ok(valid) => return Ok(valid),
            Err(err) => tracing::error!("Invalid filename: {err}"),
        }
    }
}
