// 並行計算システムのトレイト定義
// 全ての抽象化インターフェースを定義

use super::types::ComputationOutcome;
use async_trait::async_trait;
use mockall::automock;

/// 並列階乗エンジンの設定を抽象化するトレイト
#[automock]
pub trait EngineConfig: Send + Sync {
    /// タイムアウト未指定時に使うデフォルト値（ミリ秒）
    fn default_timeout_ms(&self) -> u64;

    /// タイムアウトの上限値（ミリ秒）。指定値はここまでクランプされる
    fn max_timeout_ms(&self) -> u64;

    /// この値未満の引数は並列化せず1ワーカーで計算する
    fn small_argument_threshold(&self) -> u32;
}

// EngineConfig for Box<dyn EngineConfig>
impl EngineConfig for Box<dyn EngineConfig> {
    fn default_timeout_ms(&self) -> u64 {
        self.as_ref().default_timeout_ms()
    }

    fn max_timeout_ms(&self) -> u64 {
        self.as_ref().max_timeout_ms()
    }

    fn small_argument_threshold(&self) -> u32 {
        self.as_ref().small_argument_threshold()
    }
}

/// 計算の開始・完了を監視するオブザーバートレイト
///
/// 登録リスナーがゼロでも計算と中断は正常に動作する。
#[automock]
#[async_trait]
pub trait ComputationObserver: Send + Sync {
    /// 計算開始時の通知
    async fn on_started(&self, argument: u32, worker_count: usize);

    /// 計算完了時の通知（成功・中断・タイムアウトのいずれでも呼ばれる）
    async fn on_completed(&self, outcome: &ComputationOutcome);
}

// ComputationObserver for Box<dyn ComputationObserver>
#[async_trait]
impl ComputationObserver for Box<dyn ComputationObserver> {
    async fn on_started(&self, argument: u32, worker_count: usize) {
        self.as_ref().on_started(argument, worker_count).await
    }

    async fn on_completed(&self, outcome: &ComputationOutcome) {
        self.as_ref().on_completed(outcome).await
    }
}
