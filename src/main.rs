use anyhow::Result;
use homepage::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
