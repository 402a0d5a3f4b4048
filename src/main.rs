use anyhow::Result;
use clap::Parser;

use cardbox::cli::{self, Cli};
use cardbox::logging;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();
    cli::run(cli).await
}
