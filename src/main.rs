use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use rinlang::lexer::KEYWORDS;
use rinlang::ScanSession;

#[derive(Parser)]
#[command(name = "rinlang")]
#[command(author, version, about = "The Rin language lexer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TokenFormat {
    /// One token per line (default)
    #[value(name = "text")]
    Text,
    /// JSON array, for downstream tooling
    #[value(name = "json")]
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a Rin source file and print the token stream
    Tokens {
        /// The source file to tokenize
        input: PathBuf,

        /// Output format
        #[arg(long = "format", value_enum, default_value = "text")]
        format: TokenFormat,
    },

    /// Scan a Rin source file and report lexical problems
    Check {
        /// The source file to check
        input: PathBuf,
    },

    /// List the reserved words of the language
    Keywords,
}

fn main() {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Raise the log level when asked for verbose output
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Commands::Tokens { input, format } => tokens(input, format),
        Commands::Check { input } => check(input),
        Commands::Keywords => keywords(),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn tokens(input: PathBuf, format: TokenFormat) -> Result<()> {
    let mut session = ScanSession::open(&input)?;
    let tokens = session.scan();
    session.render_reports();

    // The stream is total even when diagnostics were filed, so the dump
    // is printed either way.
    match format {
        TokenFormat::Text => {
            for token in &tokens {
                println!("{:?}", token);
            }
        }
        TokenFormat::Json => {
            let json =
                serde_json::to_string_pretty(&tokens).context("failed to serialize tokens")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn check(input: PathBuf) -> Result<()> {
    let mut session = ScanSession::open(&input)?;
    let tokens = session.scan();
    session.render_reports();

    if session.has_errors() {
        bail!(
            "{} lexical error(s) in {}",
            session
                .reports()
                .items()
                .iter()
                .filter(|item| item.level == rinlang::ReportLevel::Error)
                .count(),
            session.input_name()
        );
    }

    println!(
        "{}: {} token(s), no lexical errors",
        session.input_name(),
        tokens.len()
    );
    Ok(())
}

fn keywords() -> Result<()> {
    for spelling in KEYWORDS.keys() {
        println!("{}", spelling);
    }
    Ok(())
}
