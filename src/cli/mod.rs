use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod calendar;
pub mod serve;
pub mod validate;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Look up today's calendar details once and print the response
    Calendar {},
    /// Check that the published JSON data files parse
    ValidateJson {
        /// Content root containing the public directory
        #[arg(long, default_value = ".")]
        root: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Calendar {}) => {
            calendar::run().await?;
        }
        Some(Command::ValidateJson { root }) => {
            validate::run(&root)?;
        }
        None => {}
    }

    Ok(())
}
