//! Verso interactive converter
//!
//! Reads one request per line from stdin ("10 km to mi", "32 f in c"),
//! prints one result line per request to stdout, and stops on "exit" or
//! EOF. Diagnostics go to stderr through `tracing` (enable with RUST_LOG)
//! so stdout stays a clean transcript.

use std::io::{self, BufRead};

use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use verso_units::{convert, parse_request};

const PROMPT: &str = "Enter what you want to convert (or exit):";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        println!("{PROMPT}");

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                error!(%err, "failed to read stdin");
                break;
            }
        }

        let line = line.trim_end_matches(['\r', '\n']).to_lowercase();
        if line == "exit" {
            break;
        }

        match parse_request(&line) {
            Ok(request) => match convert(request.quantity, &request.source, &request.target) {
                Ok(sentence) => println!("{sentence}"),
                Err(err) => {
                    if err.is_internal() {
                        error!(%err, input = %line, "conversion contract violation");
                    }
                    println!("{err}");
                }
            },
            Err(err) => {
                debug!(%err, input = %line, "input did not match the request grammar");
                println!("Parse error");
            }
        }
    }
}
