//! `goqldom-playground` binary serving the goqldom GraphQL Playground.

use clap::Parser as _;
use goqldom_service::{cli::Cli, logging};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    if let Err(e) = goqldom_service::run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
