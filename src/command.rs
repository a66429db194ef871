use std::fs::File;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot create output file \"{path}\": {source}")]
    OutputFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Exit status and captured text of a finished command.
#[derive(Debug)]
pub struct CommandOutcome {
    pub status: ExitStatus,
    /// Stdout followed by stderr.
    pub output: String,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn status_text(&self) -> String {
        match self.status.code() {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs `program` to completion, capturing stdout and stderr.
pub fn run(program: &str, args: &[&str]) -> Result<CommandOutcome, CommandError> {
    tracing::debug!("Running: {program} {}", args.join(" "));

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(CommandOutcome {
        status: output.status,
        output: text,
    })
}

/// Runs `program` with stdout written to `dest`; only stderr is captured.
pub fn run_to_file(program: &str, args: &[&str], dest: &Path) -> Result<CommandOutcome, CommandError> {
    tracing::debug!(
        "Running: {program} {} > \"{}\"",
        args.join(" "),
        dest.display()
    );

    let file = File::create(dest).map_err(|source| CommandError::OutputFile {
        path: dest.display().to_string(),
        source,
    })?;

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::from(file))
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;

    Ok(CommandOutcome {
        status: output.status,
        output: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Starts `program` without waiting for it. All output is discarded.
pub fn spawn_detached(program: &str, args: &[&str]) -> Result<(), CommandError> {
    tracing::debug!("Spawning: {program} {}", args.join(" "));

    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(drop)
        .map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })
}
