//! Mini C Compiler Driver
//!
//! Command-line entry point: reads one source file, parses and analyzes it,
//! and writes the requested listings. The first diagnostic ends the run with
//! exit status 1.

use clap::Parser;
use log::{debug, info, LevelFilter};
use mcc_common::CompilerError;
use mcc_frontend::listing;
use mcc_frontend::{Frontend, Program, SemanticAnalyzer, Token, TokenType};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mcc")]
#[command(about = "Mini C Compiler front end")]
#[command(version = "0.1.0")]
struct Cli {
    /// Input source file
    input: PathBuf,

    /// Write the declaration listing to this file
    #[arg(long)]
    declarations: Option<PathBuf>,

    /// Write the expression type listing to this file
    #[arg(long)]
    types: Option<PathBuf>,

    /// Print the analyzed program as JSON
    #[arg(long)]
    dump_ast: bool,

    /// Stop after parsing
    #[arg(long, conflicts_with = "types")]
    parse_only: bool,

    /// Print the token stream, one token per line, and stop
    #[arg(long, conflicts_with_all = ["declarations", "types", "dump_ast", "parse_only"])]
    tokens: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(&cli) {
        Ok(summary) => println!("{}", summary),
        Err(e) => {
            if let Some(location) = e.location() {
                debug!("stopped at {}", location);
            }
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

/// `RUST_LOG` wins when set; otherwise warnings plus one level per `-v`
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.init();
}

fn run(cli: &Cli) -> Result<String, CompilerError> {
    info!("compiling {}", cli.input.display());
    let source = fs::read_to_string(&cli.input)?;
    let filename = cli.input.display().to_string();

    if cli.tokens {
        let tokens = Frontend::tokenize_source(&source, &filename)?;
        return Ok(token_listing(&tokens));
    }

    let program = compile(&source, &filename, cli.parse_only)?;

    if let Some(path) = &cli.declarations {
        listing::declarations_to_path(&program, path)?;
    }
    if let Some(path) = &cli.types {
        listing::expression_types_to_path(&program, path)?;
    }
    if cli.dump_ast {
        println!("{}", program.to_json()?);
    }

    Ok(summary(&program))
}

fn compile(source: &str, filename: &str, parse_only: bool) -> Result<Program, CompilerError> {
    let mut program = Frontend::parse_source(source, filename)?;
    debug!("parsed {}", filename);

    if !parse_only {
        SemanticAnalyzer::new().analyze(&mut program)?;
        debug!("analyzed {}", filename);
    }

    Ok(program)
}

/// One `line:column kind 'text'` line per token, without the end-of-file sentinel
fn token_listing(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|token| token.token_type != TokenType::EndOfFile)
        .map(|token| {
            format!(
                "{}:{} {:?} '{}'",
                token.location.line, token.location.column, token.token_type, token.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn summary(program: &Program) -> String {
    format!(
        "{} global variable(s), {} function(s)",
        program.globals.len(),
        program.functions.len()
    )
}
