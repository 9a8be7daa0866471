//! Command-line front end for the solve and check operations.
//!
//! This example shows how to:
//! - Build request bodies from command-line arguments
//! - Run the solve and check operations
//! - Print the JSON bodies a transport would return
//!
//! # Usage
//!
//! Solve a puzzle:
//!
//! ```sh
//! cargo run --example solve_puzzle -- solve \
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//! ```
//!
//! Check a single placement:
//!
//! ```sh
//! cargo run --example solve_puzzle -- check \
//!     "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6.." A2 7
//! ```
//!
//! Omitted arguments are passed through as missing fields, so the rejection
//! bodies can be exercised too:
//!
//! ```sh
//! cargo run --example solve_puzzle -- solve
//! ```

use std::process;

use clap::{Parser, Subcommand};
use ninefold_api::{CheckRequest, CheckResponse, SolveRequest, SolveResponse};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a puzzle string.
    Solve {
        /// 81 characters, digits 1-9 for givens and `.` for empty cells.
        puzzle: Option<String>,
    },
    /// Check a single placement against a puzzle string.
    Check {
        /// 81 characters, digits 1-9 for givens and `.` for empty cells.
        puzzle: Option<String>,
        /// Cell to check, a row letter A-I followed by a column digit 1-9.
        coordinate: Option<String>,
        /// Digit to place, 1-9.
        value: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let (body, rejected) = match args.command {
        Command::Solve { puzzle } => {
            let response = SolveRequest { puzzle }.respond();
            (encode(&response), matches!(response, SolveResponse::Error { .. }))
        }
        Command::Check {
            puzzle,
            coordinate,
            value,
        } => {
            let response = CheckRequest {
                puzzle,
                coordinate,
                value,
            }
            .respond();
            (encode(&response), matches!(response, CheckResponse::Error { .. }))
        }
    };

    println!("{body}");
    if rejected {
        process::exit(1);
    }
}

fn encode<T: Serialize>(response: &T) -> String {
    match serde_json::to_string_pretty(response) {
        Ok(body) => body,
        Err(err) => {
            eprintln!("Failed to encode response: {err}");
            process::exit(2);
        }
    }
}
