//! # boxtable
//!
//! A CLI that prints query result sets as boxed ASCII tables.
//!
//! ## Overview
//!
//! boxtable is built on top of boxtablelib. It does not talk to a database:
//! it reads result sets that were already fetched, as JSON, and prints them
//! the way SQL command-line clients do.
//!
//! ## Usage
//!
//! ```bash
//! # Render a result set from a file
//! boxtable result.json
//!
//! # Read from stdin
//! echo '{"columns": ["id", "name"], "rows": [[1, "Al"], [22, "Bob"]]}' | boxtable
//!
//! # Several result sets in one document, with row counts
//! boxtable batch.json --summary
//!
//! # Widths and lines as JSON
//! boxtable result.json --output json
//! ```
//!
//! Set `BOXTABLE_LOG` (e.g. `BOXTABLE_LOG=debug`) to log to stderr.

mod render;

use std::process::ExitCode;

use boxtablelib::{RenderedTable, ResultSet};
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use render::OutputMode;

/// Environment variable holding the log filter
const LOG_ENV: &str = "BOXTABLE_LOG";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("boxtable")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Print query result sets as boxed ASCII tables")
        .arg(
            Arg::new("input")
                .help("JSON file with one result set or an array of them ('-' for stdin)")
                .default_value("-"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("summary")
                .short('s')
                .long("summary")
                .action(ArgAction::SetTrue)
                .help("Print the row count after each table"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .help("Disable colored error output"),
        )
}

/// Install the stderr log subscriber, filtered by `BOXTABLE_LOG`
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be set when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load result sets from a file, or stdin for `-`
fn load_input(input: &str) -> anyhow::Result<Vec<ResultSet>> {
    if input == "-" {
        Ok(ResultSet::from_reader(std::io::stdin().lock())?)
    } else {
        Ok(ResultSet::load(input)?)
    }
}

/// Load, render and format everything; nothing is printed here
fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let input = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or("-");
    let mode = matches
        .get_one::<String>("output")
        .map(|s| OutputMode::from_arg(s))
        .unwrap_or_default();
    let summary = matches.get_flag("summary");

    let sets = load_input(input)?;
    info!(input, count = sets.len(), "rendering result sets");

    // Sets are validated at load time, so rendering cannot hit a shape error
    let tables = sets
        .iter()
        .map(ResultSet::render)
        .collect::<Result<Vec<RenderedTable>, _>>()?;
    debug!(?mode, summary, "formatting output");

    Ok(render::render(&tables, mode, summary)?)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging();

    if matches.get_flag("no-color") {
        console::set_colors_enabled_stderr(false);
    }

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let style = Style::new().red().for_stderr();
            eprintln!("{}", style.apply_to(format!("Error: {e}")));
            ExitCode::FAILURE
        }
    }
}
