//! Resolves a URL to its readable content and prints it.
//!
//! Prints the provenance note followed by the content markup, or a JSON
//! summary with `--json`. Logging goes to stderr and follows `RUST_LOG`.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use rs_readable::{Options, Resolver};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// resolve_url - print the readable content of an article URL
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL of the article or post
    url: String,

    /// Print a JSON summary instead of markup
    #[arg(long)]
    json: bool,

    /// Record score contributions and log the top scored nodes
    #[arg(long)]
    debug: bool,

    /// Request timeout in seconds
    #[arg(short = 't', long = "timeout", default_value_t = 30)]
    timeout_secs: u64,

    /// Minimum text length of accepted feed content
    #[arg(long = "min-feed-len", default_value_t = 512)]
    min_feed_text_len: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.debug { "warn,rs_readable=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(url = %args.url, error = %e, "resolution failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let options = Options {
        debug: args.debug,
        timeout_secs: args.timeout_secs,
        min_feed_text_len: args.min_feed_text_len,
        ..Options::default()
    };

    let resolver = Resolver::from_options(options)?;
    let outcome = resolver.resolve(&args.url)?;

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &outcome.summary())?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", outcome.note())?;
        writeln!(out, "{}", outcome.html())?;
    }
    out.flush()?;
    Ok(())
}
