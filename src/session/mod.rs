// Producer/Consumerセッション
// ブロッキングキューを介した並列送受信のデモンストレーションと計測

use crate::core::config::{
    DEFAULT_PRODUCER_DELAY_MS, DEFAULT_QUEUE_CAPACITY, DEFAULT_SESSION_MESSAGES,
};
use crate::core::types::SessionSummary;
use crate::queue::BoundedBlockingQueue;
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

/// 1回のセッションの設定
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// キューの容量
    pub capacity: usize,
    /// Producer/Consumerそれぞれのスレッド数（=メッセージ数）
    pub message_count: usize,
    /// 各Producerが送信前に待機する時間
    pub producer_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_QUEUE_CAPACITY,
            message_count: DEFAULT_SESSION_MESSAGES,
            producer_delay: Duration::from_millis(DEFAULT_PRODUCER_DELAY_MS),
        }
    }
}

struct SessionProgress {
    received_messages: usize,
    finished_consumers: usize,
}

/// セッションを実行し、全Consumerの完了を待ってサマリーを返す
///
/// メッセージ数ぶんのProducerスレッド（遅延後に `put`）とConsumerスレッド
/// （`take` 1回）を起動し、呼び出しスレッドが監視役として
/// Mutex+Condvarで全Consumerの完了を待つ。ブロッキングするため、
/// 非同期コンテキストからは `spawn_blocking` 経由で呼ぶこと。
pub fn run_session(config: &SessionConfig) -> SessionSummary {
    let queue = Arc::new(BoundedBlockingQueue::new(config.capacity));
    let progress = Arc::new((
        Mutex::new(SessionProgress {
            received_messages: 0,
            finished_consumers: 0,
        }),
        Condvar::new(),
    ));

    let start_time = Instant::now();

    // Producer起動
    for index in 0..config.message_count {
        let queue = Arc::clone(&queue);
        let delay = config.producer_delay;
        thread::spawn(move || {
            thread::sleep(delay);
            // セッション中の中断はないため、失敗は静かに破棄してよい
            let _ = queue.put(index);
        });
    }

    // Consumer起動
    for _ in 0..config.message_count {
        let queue = Arc::clone(&queue);
        let progress = Arc::clone(&progress);
        thread::spawn(move || {
            let received = queue.take().is_ok();

            let (lock, condvar) = &*progress;
            let mut state = lock.lock().unwrap_or_else(PoisonError::into_inner);
            if received {
                state.received_messages += 1;
            }
            state.finished_consumers += 1;
            condvar.notify_all();
        });
    }

    // 監視役: 全Consumerの完了を待つ
    let (lock, condvar) = &*progress;
    let mut state = lock.lock().unwrap_or_else(PoisonError::into_inner);
    while state.finished_consumers < config.message_count {
        state = condvar
            .wait(state)
            .unwrap_or_else(PoisonError::into_inner);
    }

    SessionSummary {
        message_count: config.message_count,
        received_messages: state.received_messages,
        elapsed_ms: start_time.elapsed().as_millis() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_delivers_all_messages() {
        let config = SessionConfig {
            capacity: 3,
            message_count: 50,
            producer_delay: Duration::from_millis(1),
        };

        let summary = run_session(&config);

        assert_eq!(summary.message_count, 50);
        assert_eq!(summary.received_messages, 50);
    }

    #[test]
    fn test_session_with_capacity_one() {
        // 容量1でもバックプレッシャーで全件届く
        let config = SessionConfig {
            capacity: 1,
            message_count: 20,
            producer_delay: Duration::ZERO,
        };

        let summary = run_session(&config);
        assert_eq!(summary.received_messages, 20);
    }

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.capacity, DEFAULT_QUEUE_CAPACITY);
        assert_eq!(config.message_count, DEFAULT_SESSION_MESSAGES);
    }
}
