use std::fs::File;
use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "canjson-cli",
    about = "Rewrite JSON into canonical form: compact, map keys sorted",
    version
)]
struct Args {
    /// Treat objects as records: drop empty members, keep document order
    #[arg(long, default_value_t = false)]
    omit_empty: bool,

    /// Escape <, >, & and U+2028/U+2029
    #[arg(long, default_value_t = false)]
    escape_html: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }
    tracing::debug!(bytes = buf.len(), omit_empty = args.omit_empty, "read input");

    let json: serde_json::Value = serde_json::from_str(&buf)?;
    let value = if args.omit_empty {
        canjson::json::omit_empty_members(&json)
    } else {
        canjson::Value::from(&json)
    };

    let options = canjson::Options::default().escape_html(args.escape_html);
    let out = canjson::encode_with(&value, &options)?;

    let mut stdout = stdout().lock();
    stdout.write_all(&out)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
