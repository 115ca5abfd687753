//! `doublebook` CLI -- check a list of calendar events for double-bookings.
//!
//! Reads a JSON request body (`{"events": [...]}`), normalizes every event
//! to UTC, and prints the JSON reply: the double-booked id pairs on success,
//! or the error envelope when the input is rejected.
//!
//! ## Usage
//!
//! ```sh
//! # Check events piped via stdin
//! echo '{"events":[{"id":1,"start":"2023-02-02 13:00","end":"2023-02-02 14:00","timezone":"America/Bogota"}]}' | doublebook
//!
//! # Check events from a file, write the reply to a file
//! doublebook -i events.json -o reply.json
//!
//! # Pretty-print the reply
//! doublebook -i events.json --pretty
//! ```
//!
//! The process exits 0 when the reply is a success and 1 when the engine
//! rejected the request; the error envelope is still written either way.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(
    name = "doublebook",
    version,
    about = "Find double-booked calendar events across timezones"
)]
struct Cli {
    /// Input file containing the JSON request (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file for the JSON reply (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Pretty-print the JSON reply
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let body = read_input(cli.input.as_deref())?;
    let reply = booking_api::handle(&body);

    let rendered = if cli.pretty {
        pretty_json(&reply.body)?
    } else {
        reply.body
    };

    write_output(cli.output.as_deref(), &rendered)?;

    if reply.status != 200 {
        process::exit(1);
    }

    Ok(())
}

/// Re-render a reply body with pretty JSON formatting.
fn pretty_json(body: &str) -> Result<String> {
    let value: serde_json::Value =
        serde_json::from_str(body).context("reply body is not valid JSON")?;
    Ok(serde_json::to_string_pretty(&value)?)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
