// 縮約ジョブの共有状態
// ワーカー・コーディネーター・中断ハンドルが共有する同期プリミティブ

use num_bigint::BigUint;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// 1回の並列階乗計算の共有状態
///
/// 部分結果スロット・完了カウンター・中断フラグは単一のMutexで保護され、
/// コーディネーターは同じロック上のCondvarで完了・中断・期限切れの
/// 3条件の競合を解決する。期限はジョブ開始時に一度だけ固定され、
/// 以降は全ワーカーから読み取り専用で共有される。
pub struct ReductionJob {
    worker_count: usize,
    deadline: Instant,
    state: Mutex<JobState>,
    progress: Condvar,
}

pub(crate) struct JobState {
    /// ワーカーインデックスごとの部分積。所有ワーカーがちょうど1回だけ書き込む
    pub(crate) partial_results: Vec<Option<BigUint>>,
    /// 完了したワーカー数。単調増加、0 ≤ finished ≤ worker_count
    pub(crate) finished: usize,
    /// 外部からの中断フラグ。false→trueの一方向のみ
    pub(crate) aborted: bool,
}

impl ReductionJob {
    /// 新しいジョブを作成し、期限を現在時刻 + timeout に固定する
    pub fn new(worker_count: usize, timeout: Duration) -> Arc<Self> {
        Arc::new(Self {
            worker_count,
            deadline: Instant::now() + timeout,
            state: Mutex::new(JobState {
                partial_results: vec![None; worker_count],
                finished: 0,
                aborted: false,
            }),
            progress: Condvar::new(),
        })
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// 期限が過ぎたかどうか。ワーカーは乗算1回ごとにこれを確認する
    pub fn is_timed_out(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// 期限までの残り時間。期限超過後はゼロ
    pub fn remaining_time(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// ワーカーが部分積を提出し、完了を通知する
    ///
    /// スロットへの書き込みと完了カウンターの更新を同一ロック下で行うため、
    /// コーディネーターが `finished == worker_count` を観測した時点で
    /// 全スロットの可視性が保証される。
    pub(crate) fn submit_partial(&self, worker_index: usize, product: BigUint) {
        let mut state = self.lock_state();
        debug_assert!(state.partial_results[worker_index].is_none());
        state.partial_results[worker_index] = Some(product);
        state.finished += 1;
        self.progress.notify_all();
    }

    /// 中断フラグを立てて待機中のコーディネーターを起こす
    ///
    /// 実行中のワーカーは強制終了されず、結果は集約時に破棄される。
    pub(crate) fn abort(&self) {
        let mut state = self.lock_state();
        if !state.aborted {
            state.aborted = true;
            self.progress.notify_all();
        }
    }

    pub(crate) fn lock_state(&self) -> MutexGuard<'_, JobState> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn wait_on_progress<'a>(
        &self,
        guard: MutexGuard<'a, JobState>,
        remaining: Duration,
    ) -> MutexGuard<'a, JobState> {
        self.progress
            .wait_timeout(guard, remaining)
            .unwrap_or_else(PoisonError::into_inner)
            .0
    }
}

/// 中断シグナルを送るためのクローン可能なハンドル
///
/// UIレイヤー等の外部コラボレーターが保持し、計算開始後いつでも
/// `abort` を呼べる。リスナーがゼロでも中断は有効に働く。
#[derive(Clone)]
pub struct AbortHandle {
    job: Arc<ReductionJob>,
}

impl AbortHandle {
    pub(crate) fn new(job: &Arc<ReductionJob>) -> Self {
        Self {
            job: Arc::clone(job),
        }
    }

    /// 計算を論理的に中断する（一度だけ有効、冪等）
    pub fn abort(&self) {
        self.job.abort();
    }
}
