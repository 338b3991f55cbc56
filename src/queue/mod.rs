// 容量制限付きブロッキングキュー
// 単一Mutexと2つのCondvarによるProducer/Consumer間のバックプレッシャー制御

use crate::core::error::{ComputeError, ComputeResult};
use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// 固定容量のFIFOブロッキングキュー
///
/// `put` は満杯の間、`take` は空の間、呼び出しスレッドをブロックする。
/// バッファ・サイズ・中断フラグはすべて単一のMutexで保護されるため、
/// 挿入と取り出しの複合操作（変更＋サイズ更新）は常にアトミックに観測される。
/// 待機条件ごとに別々のCondvar（`not_full` / `not_empty`）を使う。
pub struct BoundedBlockingQueue<T> {
    state: Mutex<QueueState<T>>,
    not_full: Condvar,
    not_empty: Condvar,
    capacity: usize,
}

struct QueueState<T> {
    buffer: VecDeque<T>,
    interrupted: bool,
}

impl<T> BoundedBlockingQueue<T> {
    /// 指定容量のキューを作成する
    ///
    /// # Panics
    ///
    /// `capacity` が 0 の場合はパニックする。
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "キュー容量は1以上である必要があります");
        Self {
            state: Mutex::new(QueueState {
                buffer: VecDeque::with_capacity(capacity),
                interrupted: false,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
        }
    }

    /// 要素を末尾に挿入する。容量いっぱいの間はブロックする
    ///
    /// `interrupt` 済み、または待機中に中断された場合は要素を挿入せず
    /// `ComputeError::Interrupted` を返す（操作は放棄され、再試行されない）。
    pub fn put(&self, item: T) -> ComputeResult<()> {
        let mut state = self.lock_state();

        while state.buffer.len() >= self.capacity && !state.interrupted {
            state = self
                .not_full
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }

        if state.interrupted {
            return Err(ComputeError::interrupted("put"));
        }

        state.buffer.push_back(item);
        self.not_empty.notify_one();
        Ok(())
    }

    /// 先頭要素を取り出して返す。空の間はブロックする
    ///
    /// 挿入順（FIFO）で返す。中断時は `ComputeError::Interrupted` を返す。
    pub fn take(&self) -> ComputeResult<T> {
        let mut state = self.lock_state();

        while state.buffer.is_empty() && !state.interrupted {
            state = self
                .not_empty
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }

        if state.interrupted {
            return Err(ComputeError::interrupted("take"));
        }

        // ループ脱出時点でbufferは非空（interruptedでないため）
        let item = state
            .buffer
            .pop_front()
            .ok_or_else(|| ComputeError::interrupted("take"))?;
        self.not_full.notify_one();
        Ok(item)
    }

    /// ブロック中の全スレッドを起こし、以降の操作を失敗させる
    ///
    /// セッション単位の片方向シグナル。一度中断したキューは再利用できない。
    pub fn interrupt(&self) {
        let mut state = self.lock_state();
        state.interrupted = true;
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    /// キューの容量（不変）
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 現在バッファされている要素数
    pub fn len(&self) -> usize {
        self.lock_state().buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_state().buffer.is_empty()
    }

    // ロック毒化はバッファ状態を壊さないため、毒化フラグを剥がして続行する
    fn lock_state(&self) -> MutexGuard<'_, QueueState<T>> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
