use std::io::Write;

use anyhow::{Context, Result, bail};
use clorca::{Opt, Parser};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_PREFIX: &str = "Orca says: ";
const DEFAULT_MESSAGE: &str = "hello sea world!";

fn options() -> Vec<Opt> {
    vec![
        Opt::simple(["-h", "--help"])
            .name("help")
            .description("print this help page"),
        Opt::compound(["-p", "--prefix"])
            .name("prefix")
            .description("prefix to a message")
            .default_value(DEFAULT_PREFIX),
    ]
}

fn main() -> Result<()> {
    init_tracing();

    let argv = std::env::args_os().map(|a| a.to_string_lossy().into_owned());
    let matches = Parser::new(options())
        .default_arguments([DEFAULT_MESSAGE])
        .parse(argv);

    if let Err(err) = matches.status() {
        bail!(
            "clorca encountered an error during initialization: {err} (code {})",
            err.code()
        );
    }

    let mut out = std::io::stdout().lock();

    if matches.is_set("-h") {
        write!(out, "{}", matches.render_help(["message", "2nd_message"]))
            .context("failed to write help")?;
        return Ok(());
    }

    tracing::debug!(
        arguments = matches.arguments().len(),
        "echoing message"
    );
    writeln!(out, "{}{}", matches.value("-p"), matches.argument(0))
        .context("failed to write message")?;

    let second = matches.argument(1);
    if !second.is_empty() {
        writeln!(out, "Second orca says: {second}").context("failed to write message")?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
