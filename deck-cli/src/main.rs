//! Command-line interface for deck
//! Validates parsed presentation trees and compiles them into slide decks.
//!
//! Usage:
//!   deck compile `<path>` [--output-dir `<dir>`] [--format `<format>`] [--config `<file>`]
//!   deck check `<path>`
//!
//! `<path>` is the parsed document tree as JSON, or YAML when it ends in `.yaml`/`.yml`.
//! Settings come from the built-in defaults, `deck.toml` in the working directory if
//! present, then `--config`.

use clap::{Arg, ArgAction, ArgMatches, Command};
use deck::deck::ast::Model;
use deck::deck::diagnostics::{Decision, Diagnostics};
use deck::deck::error::CompileError;
use deck::deck::pipeline::Pipeline;
use deck_babel::{publish, FormatRegistry, PublishArtifact, PublishSpec};
use deck_config::{DeckConfig, Loader};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG: &str = "deck.toml";

fn main() {
    let matches = Command::new("deck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate and compile deck presentations")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline progress to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults and ./deck.toml")
                .global(true),
        )
        .arg(
            Arg::new("deny-warnings")
                .long("deny-warnings")
                .help("Treat warnings as errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("compile")
                .about("Validate a deck and write the generated presentation")
                .arg(
                    Arg::new("path")
                        .help("Path to the parsed document tree (JSON or YAML)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output-dir")
                        .long("output-dir")
                        .short('o')
                        .help("Directory the artifact is written to")
                        .default_value("."),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (default: output.format from the configuration)"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a deck and report diagnostics")
                .arg(
                    Arg::new("path")
                        .help("Path to the parsed document tree (JSON or YAML)")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));
    let config =
        load_config(&matches).unwrap_or_else(|e| fail(&format!("Configuration error: {e}")));

    match matches.subcommand() {
        Some(("compile", sub)) => handle_compile_command(sub, &config),
        Some(("check", sub)) => handle_check_command(sub, &config),
        _ => unreachable!("a subcommand is required"),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<DeckConfig, deck_config::ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("deny-warnings") {
        loader = loader.set_override("validation.deny_warnings", true)?;
    }
    loader.build()
}

fn path_arg(matches: &ArgMatches) -> &Path {
    Path::new(
        matches
            .get_one::<String>("path")
            .expect("path is a required argument"),
    )
}

/// Read the document tree, picking the parser from the file extension
fn load_model(path: &Path) -> Model {
    let source = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(&format!("Cannot read {}: {}", path.display(), e)));
    let yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    let parsed = if yaml {
        serde_yaml::from_str(&source).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&source).map_err(|e| e.to_string())
    };
    parsed.unwrap_or_else(|e| fail(&format!("Cannot parse {}: {}", path.display(), e)))
}

fn report(path: &Path, diagnostics: &Diagnostics) {
    for diagnostic in diagnostics.iter() {
        eprintln!("{}: {}", path.display(), diagnostic);
    }
}

/// Handle the compile command
fn handle_compile_command(matches: &ArgMatches, config: &DeckConfig) {
    let path = path_arg(matches);
    let model = load_model(path);
    let format = matches
        .get_one::<String>("format")
        .map_or(config.output.format.as_str(), String::as_str);

    let registry = FormatRegistry::with_defaults();
    if !registry.has(format) {
        fail(&format!(
            "Unknown format '{}'. Available formats: {}",
            format,
            registry.list_formats().join(", ")
        ));
    }

    let pipeline = Pipeline::new().deny_warnings(config.validation.deny_warnings);
    let compilation = match pipeline.run(&model) {
        Ok(compilation) => compilation,
        Err(CompileError::Rejected { diagnostics }) => {
            report(path, &diagnostics);
            fail(&format!(
                "{}: rejected with {} error(s) and {} warning(s); nothing written",
                path.display(),
                diagnostics.error_count(),
                diagnostics.warning_count()
            ));
        }
        Err(err) => fail(&format!("{}: {}", path.display(), err)),
    };
    report(path, &compilation.diagnostics);

    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("deck");
    let output_dir = matches
        .get_one::<String>("output-dir")
        .map_or_else(|| PathBuf::from("."), PathBuf::from);

    let result = PublishSpec::new(&compilation.tree, format)
        .with_options(config.html_options().to_options())
        .with_output_dir(&output_dir, stem)
        .and_then(publish)
        .unwrap_or_else(|e| fail(&format!("Publish error: {e}")));

    if let PublishArtifact::File(written) = result.artifact {
        debug!(path = %written.display(), "artifact written");
        println!("{}", written.display());
    }
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches, config: &DeckConfig) {
    let path = path_arg(matches);
    let model = load_model(path);
    let diagnostics = Pipeline::new().check(&model);

    report(path, &diagnostics);
    if diagnostics.decision(config.validation.deny_warnings) == Decision::Abort {
        std::process::exit(1);
    }
    println!(
        "{}: ok ({} warning(s))",
        path.display(),
        diagnostics.warning_count()
    );
}
