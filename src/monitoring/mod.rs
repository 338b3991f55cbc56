// 計算監視の具象実装

use crate::core::traits::ComputationObserver;
use crate::core::types::ComputationOutcome;
use async_trait::async_trait;

/// コンソール出力による監視実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleObserver {
    quiet: bool,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl ComputationObserver for ConsoleObserver {
    async fn on_started(&self, argument: u32, worker_count: usize) {
        if !self.quiet {
            println!("🚀 {argument}! の計算を開始 (ワーカー数: {worker_count})");
        }
    }

    async fn on_completed(&self, outcome: &ComputationOutcome) {
        if !self.quiet {
            match outcome {
                ComputationOutcome::Factorial(_) => println!("✅ 計算完了"),
                ComputationOutcome::Aborted => println!("🛑 計算は中断されました"),
                ComputationOutcome::TimedOut => println!("⏰ 計算はタイムアウトしました"),
            }
        }
    }
}

/// 何もしない監視実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpObserver;

impl NoOpObserver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ComputationObserver for NoOpObserver {
    async fn on_started(&self, _argument: u32, _worker_count: usize) {
        // 何もしない
    }

    async fn on_completed(&self, _outcome: &ComputationOutcome) {
        // 何もしない
    }
}
