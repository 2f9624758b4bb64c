//! Command-line interface for munch
//! This binary tokenizes, parses and evaluates arithmetic expressions from files or the command line.
//!
//! Usage:
//!   munch process `<path>` `[format]`    - Process a file and output to stdout
//!   munch expr `<source>` `[format]`     - Process an expression given inline
//!   munch formats                      - List all available formats
//!
//! `--config <file>` layers a TOML file over the built-in defaults. Set `RUST_LOG=debug` (or
//! `trace`) to see what the lexer and parser are doing.

use clap::{Arg, ArgMatches, Command};
use munch::munch::config::{Loader, MunchConfig};
use munch::munch::error::format_source_context;
use munch::munch::processor::{
    available_formats, process_source, ProcessingError, ProcessingSpec,
};
use std::fs;
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    let matches = build_cli().try_get_matches().unwrap_or_else(|e| e.exit());

    let config = load_config(matches.get_one::<PathBuf>("config")).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    match matches.subcommand() {
        Some(("process", process_matches)) => {
            let path = required(process_matches, "path");
            let source = fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("Error: failed to read {}: {}", path, e);
                process::exit(1);
            });
            handle_process_command(&source, format_arg(process_matches, &config), &config);
        }
        Some(("expr", expr_matches)) => {
            let source = required(expr_matches, "source");
            handle_process_command(&source, format_arg(expr_matches, &config), &config);
        }
        Some(("formats", _)) => handle_formats_command(),
        _ => {
            eprintln!("Error: no command given (try --help)");
            process::exit(1);
        }
    }
}

fn build_cli() -> Command {
    Command::new("munch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A maximal-munch lexer and recursive-descent parser for arithmetic expressions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .subcommand(
            Command::new("process")
                .about("Process a file and output to stdout")
                .arg(
                    Arg::new("path")
                        .help("Path to the expression file to process")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .help("Output format (e.g., token-simple, ast-treeviz); defaults to output.format")
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("expr")
                .about("Process an expression given on the command line")
                .arg(
                    Arg::new("source")
                        .help("Expression text, e.g. \"3.0 + 2.0 * 4.0\"")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .help("Output format (e.g., eval-json); defaults to output.format")
                        .index(2),
                ),
        )
        .subcommand(Command::new("formats").about("List all available output formats"))
}

fn load_config(path: Option<&PathBuf>) -> Result<MunchConfig, config::ConfigError> {
    let loader = Loader::new();
    match path {
        Some(path) => loader.with_file(path).build(),
        None => loader.build(),
    }
}

fn required(matches: &ArgMatches, name: &str) -> String {
    matches.get_one::<String>(name).cloned().unwrap_or_else(|| {
        eprintln!("Error: missing argument <{}>", name);
        process::exit(1);
    })
}

fn format_arg(matches: &ArgMatches, config: &MunchConfig) -> String {
    matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.output.format.clone())
}

/// Handle the process and expr commands
fn handle_process_command(source: &str, format_str: String, config: &MunchConfig) {
    let result = ProcessingSpec::from_string(&format_str)
        .and_then(|spec| process_source(source, &spec, config));

    match result {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            match &e {
                ProcessingError::Frontend(err) => {
                    if let Some(position) = err.position() {
                        eprintln!("\n{}", format_source_context(source, position));
                    }
                }
                _ => {
                    eprintln!("\nAvailable formats:");
                    for format in available_formats() {
                        eprintln!("  {}", format);
                    }
                }
            }
            process::exit(1);
        }
    }
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:");
    for format in available_formats() {
        println!("  {}", format);
    }
}
