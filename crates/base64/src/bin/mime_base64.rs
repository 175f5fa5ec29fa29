//! `mime-base64` — encode stdin to base64, or decode it with `-d`.
//!
//! Usage:
//!   mime-base64 [-d|--decode] [-n|--no-newline]
//!
//! Set `RUST_LOG=debug` to trace sizes on stderr.

use mime_base64::cli::{init_tracing, parse_args, run};
use std::io::{self, Read, Write};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Usage: mime-base64 [-d|--decode] [-n|--no-newline]");
            std::process::exit(2);
        }
    };

    let mut input = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut input) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(options, &input) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(&output).and_then(|()| stdout.flush()) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
