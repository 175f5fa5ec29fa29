//! `mime-base64` command-line front end.
//!
//! Provides the logic used by the binary entry point:
//! - default: encode stdin bytes to base64 text
//! - `-d`/`--decode`: decode base64 text (whitespace allowed) from stdin to bytes
//! - `-n`/`--no-newline`: do not terminate encoded output with a newline

use thiserror::Error;
use tracing::{debug, warn};

use crate::{decode, encode, DecodeError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

// ── Arguments ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Encode,
    Decode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    pub newline: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: Mode::Encode,
            newline: true,
        }
    }
}

/// Parse command-line arguments, excluding the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Options, CliError> {
    let mut options = Options::default();
    for arg in args {
        match arg.as_ref() {
            "-d" | "--decode" => options.mode = Mode::Decode,
            "-n" | "--no-newline" => options.newline = false,
            other => return Err(CliError::UnknownArgument(other.to_string())),
        }
    }
    Ok(options)
}

// ── Run ───────────────────────────────────────────────────────────────────

/// Transform `input` according to `options`, returning the bytes to write to stdout.
pub fn run(options: Options, input: &[u8]) -> Result<Vec<u8>, CliError> {
    debug!(mode = ?options.mode, input_len = input.len(), "processing input");
    let output = match options.mode {
        Mode::Encode => {
            let mut text = encode(input).into_bytes();
            if options.newline {
                text.push(b'\n');
            }
            text
        }
        Mode::Decode => {
            let text = std::str::from_utf8(input)?;
            decode(text).inspect_err(|e| warn!(kind = ?e.kind(), "rejected input: {e}"))?
        }
    };
    debug!(output_len = output.len(), "done");
    Ok(output)
}

/// Install a stderr log subscriber filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
