//! # multitab
//!
//! CLI for multitablib: prints a minimal-width multiplication table,
//! then the genitive form of a counted Russian noun.
//!
//! ## Usage
//!
//! ```bash
//! # Default run: 5×5 table, then "23 компьютера"
//! multitab
//!
//! # Bigger table
//! multitab --length 12
//!
//! # Decline another count and word
//! multitab --count 5 --word машина
//! ```
//!
//! Each task runs independently: a domain error in one is printed as
//! its message text on stdout and the other task still runs. The exit
//! code is always 0.

use std::process::ExitCode;

use anyhow::Result;
use clap::{value_parser, Arg, ArgMatches, Command};
use console::Style;
use multitablib::{genitive_form, MultiplicationTable, DEFAULT_WORD};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("multitab")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Minimal-width multiplication tables and Russian counted-noun declension")
        .arg(
            Arg::new("length")
                .short('l')
                .long("length")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .default_value("5")
                .help("Multiplication table dimension"),
        )
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .value_parser(value_parser!(u64))
                .default_value("23")
                .help("Count to put in front of the declined word"),
        )
        .arg(
            Arg::new("word")
                .short('w')
                .long("word")
                .default_value(DEFAULT_WORD)
                .help("Word to decline (компьютер or машина)"),
        )
}

/// Handler for the table task
fn table_task(matches: &ArgMatches) -> Result<String> {
    let length = matches.get_one::<i64>("length").copied().unwrap_or(5);
    let table = MultiplicationTable::new(length)?;
    Ok(table.render())
}

/// Handler for the declension task
fn declension_task(matches: &ArgMatches) -> Result<String> {
    let count = matches.get_one::<u64>("count").copied().unwrap_or(23);
    let word = matches
        .get_one::<String>("word")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_WORD);
    Ok(genitive_form(count, word)?)
}

/// Style for the task section labels
fn label_style() -> Style {
    Style::new().bold()
}

/// Print one task's labeled section. Domain errors go to stdout as
/// their message text and never stop the remaining tasks.
fn print_task(label: &str, outcome: Result<String>) {
    println!("{}", label_style().apply_to(label));
    match outcome {
        // Table output is already newline-terminated, the declension
        // line is not.
        Ok(output) if output.ends_with('\n') => print!("{output}"),
        Ok(output) => println!("{output}"),
        Err(e) => println!("{e}"),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    print_task("Task #1 output:", table_task(&matches));
    print_task("Task #2 output:", declension_task(&matches));

    ExitCode::SUCCESS
}
