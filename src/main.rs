use anyhow::Result;
use clap::Parser;

use parallel_compute::cli::{execute_factorial, execute_queue_session, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Factorial {
            argument,
            timeout_ms,
            json,
        } => execute_factorial(argument, timeout_ms, json).await,
        Commands::QueueSession {
            capacity,
            messages,
            producer_delay_ms,
            json,
        } => execute_queue_session(capacity, messages, producer_delay_ms, json).await,
    }
}
