use std::io;

use clap::Parser;
use tracing::error;

use payoff_cli::{Cli, logging};

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_file.as_deref())?;

    let result = payoff_cli::run(cli, &mut io::stdout().lock());
    if let Err(error) = &result {
        error!(?error, "command failed");
    }
    result
}
