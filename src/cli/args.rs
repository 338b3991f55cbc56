use clap::{Parser, Subcommand};

use crate::core::config::{
    DEFAULT_PRODUCER_DELAY_MS, DEFAULT_QUEUE_CAPACITY, DEFAULT_SESSION_MESSAGES,
};

#[derive(Parser)]
#[command(name = "parallel_compute")]
#[command(about = "Concurrency primitives: a bounded blocking queue and a parallel factorial engine")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute n! in parallel with a wall-clock deadline
    Factorial {
        /// Argument n (non-negative)
        argument: u32,

        /// Timeout in milliseconds (empty uses the default, values are clamped to the maximum)
        #[arg(short, long)]
        timeout_ms: Option<String>,

        /// Emit the result as a JSON report instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Run a producer/consumer session over the bounded blocking queue
    QueueSession {
        /// Queue capacity
        #[arg(short, long, default_value_t = DEFAULT_QUEUE_CAPACITY)]
        capacity: usize,

        /// Number of messages (one producer and one consumer thread each)
        #[arg(short, long, default_value_t = DEFAULT_SESSION_MESSAGES)]
        messages: usize,

        /// Delay in milliseconds before each producer sends its message
        #[arg(long, default_value_t = DEFAULT_PRODUCER_DELAY_MS)]
        producer_delay_ms: u64,

        /// Emit the summary as a JSON report instead of plain text
        #[arg(long)]
        json: bool,
    },
}
