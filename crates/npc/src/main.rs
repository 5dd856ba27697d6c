//! Nutrition Platform Cache - Admin CLI entry point

use clap::Parser;
use npc::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(Cli::parse()).await
}
