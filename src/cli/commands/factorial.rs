use crate::core::types::ComputationOutcome;
use crate::engine::FactorialEngine;
use crate::monitoring::ConsoleObserver;
use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Serialize)]
struct FactorialReport {
    argument: u32,
    result: Option<String>,
    error: Option<String>,
    elapsed_ms: u64,
}

/// 並列階乗計算を実行して結果を表示する
pub async fn execute_factorial(
    argument: u32,
    timeout_input: Option<String>,
    json: bool,
) -> Result<()> {
    let mut engine = FactorialEngine::with_defaults();
    if !json {
        engine.add_observer(Arc::new(ConsoleObserver::new()));
    }

    let start_time = Instant::now();
    let handle = engine.compute_with_timeout_input(argument, timeout_input.as_deref())?;
    let outcome = handle.outcome().await?;
    let elapsed_ms = start_time.elapsed().as_millis() as u64;

    if json {
        let report = match &outcome {
            ComputationOutcome::Factorial(value) => FactorialReport {
                argument,
                result: Some(value.to_string()),
                error: None,
                elapsed_ms,
            },
            other => FactorialReport {
                argument,
                result: None,
                error: Some(other.to_string()),
                elapsed_ms,
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match outcome {
        ComputationOutcome::Factorial(value) => {
            println!("{argument}! = {value}");
            println!("⏱️  計算時間: {elapsed_ms}ms");
        }
        other => println!("{other}"),
    }

    Ok(())
}
