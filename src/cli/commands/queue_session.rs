use crate::session::{run_session, SessionConfig};
use anyhow::Result;
use std::time::Duration;

/// Producer/Consumerセッションを実行してサマリーを表示する
pub async fn execute_queue_session(
    capacity: usize,
    messages: usize,
    producer_delay_ms: u64,
    json: bool,
) -> Result<()> {
    let config = SessionConfig {
        capacity,
        message_count: messages,
        producer_delay: Duration::from_millis(producer_delay_ms),
    };

    if !json {
        println!("🚀 セッション開始: 容量{capacity}のキューで{messages}件を送受信");
    }

    // セッションはスレッドをブロックするためブロッキングプールで実行する
    let summary = tokio::task::spawn_blocking(move || run_session(&config)).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("✅ セッション完了!");
        println!("   - 受信メッセージ数: {}/{}", summary.received_messages, summary.message_count);
        println!("   - 実行時間: {}ms", summary.elapsed_ms);
    }

    Ok(())
}
