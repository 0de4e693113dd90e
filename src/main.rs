//! gir-defs — convert GObject-Introspection XML into defs declarations.
//!
//! The whole document is parsed into an in-memory model first; rendering
//! starts only after parsing succeeded, so malformed input never produces
//! partial output.
//!
//! ```text
//! gir-defs Gtk-3.0.gir > gtk_enums.defs
//! gir-defs -e methods --all-functions -o gtk_methods.defs Gtk-3.0.gir
//! ```

mod classify;
mod error;
mod model;
mod parser;
mod render;

use anyhow::Result;
use clap::Parser;
use error::Error;
use flexi_logger::Logger;
use log::info;
use render::{EmitOptions, EntityKind};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gir-defs",
    about = "Generate defs declarations from GObject-Introspection (GIR) files"
)]
struct Cli {
    /// Input GIR file
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: defs (default), json
    #[arg(short = 'f', long, default_value = "defs")]
    format: String,

    /// Entity kinds to emit (repeatable). Defaults to enums and methods.
    #[arg(short = 'e', long = "emit", value_enum)]
    emit: Vec<EntityKind>,

    /// Also emit free functions declared inside records
    #[arg(long)]
    all_functions: bool,

    /// Log parser progress to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::try_with_env_or_str(if cli.verbose { "debug" } else { "warn" })?
        .log_to_stderr()
        .start()?;

    let input = cli.input.as_deref().ok_or(Error::MissingInput)?;
    let renderer = render::create_renderer(&cli.format, emit_options(&cli))?;

    info!("parsing {}", input.display());
    let model = parser::parse_file(input)?;
    let output = renderer.render(&model)?;

    match cli.output {
        Some(ref path) => fs::write(path, &output).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?,
        None => io::stdout().lock().write_all(output.as_bytes())?,
    }

    Ok(())
}

fn emit_options(cli: &Cli) -> EmitOptions {
    let mut options = EmitOptions {
        bound_only: !cli.all_functions,
        ..Default::default()
    };
    if !cli.emit.is_empty() {
        options.kinds = cli.emit.clone();
    }
    options
}
