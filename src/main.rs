use std::ffi::OsString;
use std::io::IsTerminal;

use clap::Parser;
use tracing::error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use command::*;

mod command;
mod document;

/// Strip redundant `format: boolean` declarations from an OpenAPI spec.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    sanitize: Sanitize,

    /// Log the location of every removal
    #[clap(short, long)]
    verbose: bool,
}

/// Flags that may be written with a single dash, e.g. `-in spec.yaml`.
const LONG_FLAGS: &[&str] = &["in", "out", "verbose", "help", "version"];

/// Rewrite `-in`/`-out` (and `-in=path`) to their double-dash form so clap accepts them.
fn go_style_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    let mut rewrite = true;
    args.into_iter()
        .map(|arg| {
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                rewrite = false;
            }
            if !rewrite || s.starts_with("--") {
                return arg;
            }
            let Some(flag) = s.strip_prefix('-') else {
                return arg;
            };
            let name = flag.split('=').next().unwrap_or(flag);
            if LONG_FLAGS.contains(&name) {
                OsString::from(format!("-{}", s))
            } else {
                arg
            }
        })
        .collect()
}

fn main() {
    let cli = Cli::parse_from(go_style_args(std::env::args_os()));

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    if let Err(e) = cli.sanitize.run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
