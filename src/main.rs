use clap::Parser;

use linebridge::bootstrapper::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bootstrapper::run(Cli::parse()).await
}
