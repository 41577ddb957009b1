use crate::repl::launch;
use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod error;
mod llm;
mod pipeline;
mod repl;
mod schema;
mod transcript;
mod types;
mod warehouse;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let config = args.into_config();

    launch(&config).await
}
