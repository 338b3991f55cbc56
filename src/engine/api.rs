// 並列階乗エンジンの公開API
// ジョブの組み立て・起動・非同期な結果配信

use super::coordinator::{resolve_outcome, wait_for_completion};
use super::job::{AbortHandle, ReductionJob};
use super::range::{partition_ranges, worker_count_for};
use super::worker::spawn_workers;
use crate::core::config::{clamp_timeout, resolve_timeout_input, DefaultEngineConfig};
use crate::core::error::{ComputeError, ComputeResult};
use crate::core::traits::{ComputationObserver, EngineConfig};
use crate::core::types::ComputationOutcome;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

/// 並列階乗計算エンジン
///
/// 呼び出しごとに新しいジョブ（分割・並列実行・集約）を組み立てる。
/// 終端状態は最終的であり、再開はない。結果は明示的な非同期チャンネルで
/// 配信され、特定のスレッドには依存しない。
pub struct FactorialEngine<C: EngineConfig> {
    config: C,
    observers: Vec<Arc<dyn ComputationObserver>>,
}

impl FactorialEngine<DefaultEngineConfig> {
    /// デフォルト設定のエンジンを作成
    pub fn with_defaults() -> Self {
        Self::new(DefaultEngineConfig::new())
    }
}

impl<C: EngineConfig> FactorialEngine<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 完了通知を受けるオブザーバーを登録する
    pub fn add_observer(&mut self, observer: Arc<dyn ComputationObserver>) {
        self.observers.push(observer);
    }

    /// `argument!` の計算を開始し、すぐにハンドルを返す
    ///
    /// `timeout` が `None` の場合は設定のデフォルト値を使い、指定値は
    /// 設定の上限までクランプされる。Tokioランタイム内から呼ぶこと。
    pub fn compute(&self, argument: u32, timeout: Option<Duration>) -> ComputationHandle {
        let timeout = clamp_timeout(
            timeout.unwrap_or_else(|| Duration::from_millis(self.config.default_timeout_ms())),
            &self.config,
        );

        let worker_count = worker_count_for(argument, self.config.small_argument_threshold());
        let ranges = partition_ranges(argument, worker_count);
        let job = ReductionJob::new(worker_count, timeout);
        let abort = AbortHandle::new(&job);

        let (result_tx, result_rx) = oneshot::channel();
        let observers = self.observers.clone();

        tokio::spawn(async move {
            for observer in &observers {
                observer.on_started(argument, worker_count).await;
            }

            // CPUバウンドな調整処理はブロッキングスレッドで実行する
            let outcome = tokio::task::spawn_blocking(move || {
                // ワーカーはjoinしない。期限切れ・中断後も走り続けるが、
                // その結果は集約時に破棄される
                let _workers = spawn_workers(&job, &ranges);
                wait_for_completion(&job);
                resolve_outcome(&job)
            })
            .await
            .map_err(ComputeError::task);

            if let Ok(outcome) = &outcome {
                for observer in &observers {
                    observer.on_completed(outcome).await;
                }
            }

            // 受信側が先にドロップした場合は結果を破棄するだけでよい
            let _ = result_tx.send(outcome);
        });

        ComputationHandle { result_rx, abort }
    }

    /// ユーザー入力のタイムアウト文字列を解決してから計算を開始する
    ///
    /// 数値として解釈できない入力は計算を一切開始せず、同期的に
    /// 使用方法エラーを返す。
    pub fn compute_with_timeout_input(
        &self,
        argument: u32,
        timeout_input: Option<&str>,
    ) -> ComputeResult<ComputationHandle> {
        let timeout = resolve_timeout_input(timeout_input, &self.config)?;
        Ok(self.compute(argument, Some(timeout)))
    }
}

/// 実行中の計算へのハンドル
///
/// 結果はちょうど1回、`Factorial`・`Aborted`・`TimedOut` のいずれかとして
/// 解決される。中断ハンドルは結果の受信と独立に、いつでも使える。
pub struct ComputationHandle {
    result_rx: oneshot::Receiver<ComputeResult<ComputationOutcome>>,
    abort: AbortHandle,
}

impl ComputationHandle {
    /// 中断シグナル用のハンドルを取り出す
    pub fn abort_handle(&self) -> AbortHandle {
        self.abort.clone()
    }

    /// 計算の終端状態を待つ
    pub async fn outcome(self) -> ComputeResult<ComputationOutcome> {
        self.result_rx
            .await
            .map_err(|_| ComputeError::channel_closed("結果チャンネルが閉じられました"))?
    }
}
