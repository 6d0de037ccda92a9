//! One-shot password check

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use passfield_shared::validate;
use tracing::debug;

/// Result of a check, mapped to the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Valid,
    Invalid,
}

impl From<CheckOutcome> for ExitCode {
    fn from(outcome: CheckOutcome) -> Self {
        match outcome {
            CheckOutcome::Valid => ExitCode::SUCCESS,
            CheckOutcome::Invalid => ExitCode::FAILURE,
        }
    }
}

/// Validate `password`, or the first line of `input` when it is `None`
///
/// Prints `ok` for a valid password, otherwise the unmet rule messages one
/// per line.
pub fn run_check<R, W>(
    password: Option<String>,
    mut input: R,
    output: &mut W,
) -> io::Result<CheckOutcome>
where
    R: BufRead,
    W: Write,
{
    let password = match password {
        Some(password) => password,
        None => {
            let mut line = String::new();
            input.read_line(&mut line)?;
            line.trim_end_matches(&['\r', '\n'][..]).to_string()
        }
    };

    let result = validate(&password);
    if result.is_valid() {
        writeln!(output, "ok")?;
        return Ok(CheckOutcome::Valid);
    }

    let failed: Vec<&str> = result.failed_rules().iter().map(|r| r.as_str()).collect();
    debug!("Password rejected: {}", failed.join(", "));
    writeln!(output, "{}", result.error_text())?;
    Ok(CheckOutcome::Invalid)
}
