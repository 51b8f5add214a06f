//! md2slack - Render lexer tokens as Slack mrkdwn

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "md2slack")]
#[command(version, about = "Render Markdown tokens as Slack mrkdwn", long_about = None)]
#[command(after_help = "EXAMPLES:
    md2slack tokens.json             Print mrkdwn for a token file
    md2slack - -o message.txt        Read tokens from stdin, write to a file
    RUST_LOG=trace md2slack t.json   Show numbering diagnostics")]
struct Cli {
    /// JSON array of token records ("-" or omitted for stdin)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Suppress the summary message
    #[arg(short, long)]
    quiet: bool,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match convert(cli.input.as_deref(), cli.output.as_deref()) {
        Ok(count) => {
            if !cli.quiet {
                eprintln!("Rendered {count} tokens");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn read_input(input: Option<&str>) -> md2slack::Result<String> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(fs::read_to_string(path)?),
    }
}

fn convert(input: Option<&str>, output: Option<&str>) -> md2slack::Result<usize> {
    let json = read_input(input)?;
    let tokens = md2slack::tokens_from_json(&json)?;
    let text = md2slack::render(&tokens);

    match output {
        Some(path) => write_message(fs::File::create(path)?, &text)?,
        None => write_message(io::stdout().lock(), &text)?,
    }

    Ok(tokens.len())
}

/// Write rendered text as one newline-terminated message.
fn write_message(mut out: impl Write, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}
