// casino25 - command-line front end for the casino25 API client

use casino25_client::cli::{dispatch, Cli};
use clap::Parser;
use std::process::exit;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {e:#}");
        exit(1);
    }
}
