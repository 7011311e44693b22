//! NACHA Codec CLI
//!
//! Parses a NACHA file and writes a CSV summary of its entries, or
//! re-emits the file with recomputed totals and block padding.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- payroll.ach > entries.csv
//! cargo run -- payroll.ach --normalize > normalized.ach
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: set to `debug` or `warn` to control logging verbosity

use nacha_codec::{generate, parse, NachaError, Result};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(NachaError::MissingArgument);
    }

    let input_path = &args[1];
    let normalize = args.iter().skip(2).any(|arg| arg == "--normalize");

    let content = fs::read_to_string(input_path)?;
    let document = parse(&content);

    let header = match document.header.clone() {
        Some(header) => header,
        None => return Err(NachaError::MissingFileHeader),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if normalize {
        let batches: Vec<_> = document
            .batches
            .into_iter()
            .map(|batch| (batch.header, batch.entries))
            .collect();
        let text = generate(&header, &batches)?;
        writeln!(handle, "{}", text)?;
    } else {
        document.write_summary(handle)?;
    }

    Ok(())
}
