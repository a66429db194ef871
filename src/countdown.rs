use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum CountdownError {
    #[error("invalid wait value \"{0}\": expected a non-negative whole number of seconds")]
    InvalidInput(String),
}

pub fn parse_seconds(input: &str) -> Result<u64, CountdownError> {
    let trimmed = input.trim();

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CountdownError::InvalidInput(input.to_string()));
    }

    trimmed
        .parse()
        .map_err(|_| CountdownError::InvalidInput(input.to_string()))
}

/// Counts down one second at a time, calling `notice` for every fifth second
/// and each of the last five.
pub fn countdown(
    input: &str,
    mut sleep: impl FnMut(Duration),
    mut notice: impl FnMut(u64),
) -> Result<(), CountdownError> {
    let seconds = parse_seconds(input)?;

    for remaining in (1..=seconds).rev() {
        if announces(remaining) {
            notice(remaining);
        }
        sleep(Duration::from_secs(1));
    }

    Ok(())
}

fn announces(remaining: u64) -> bool {
    remaining <= 5 || remaining % 5 == 0
}

pub fn log_notice(remaining: u64) {
    tracing::info!("Scanning in {remaining}...");
}
