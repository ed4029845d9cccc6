//! `roster` — command-line front-end for the user roster and its text tools.
//!
//! # Usage
//!
//! ```
//! roster add "Alice Martin" alice@example.com
//! roster disable alice@example.com
//! roster list --filter inactive
//! roster --file team.json export backup.json
//! roster hash sha256 "some text"
//! ```
//!
//! Every roster command loads the roster file, applies one operation, and
//! writes the file back when the operation changed it.

mod cli;
mod commands;
mod settings;

use std::io;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let settings = Settings::load(&cli.config, cli.file.as_deref())?;

  let stdout = io::stdout();
  commands::run(cli.command, &settings, &mut stdout.lock())
}
