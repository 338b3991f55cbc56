// ワーカースレッド - 担当範囲の部分積計算

use super::job::ReductionJob;
use crate::core::types::ComputationRange;
use num_bigint::BigUint;
use num_traits::One;
use std::sync::Arc;
use std::thread;

/// 範囲ごとに1本のワーカースレッドを起動する
///
/// 各ワーカーは乗算のたびに共有期限を確認し、期限超過時はその時点までの
/// 部分積を提出して早期終了する。中断フラグはワーカーでは確認しない
/// （中断はコーディネーターだけが扱う論理キャンセル）。
pub(crate) fn spawn_workers(
    job: &Arc<ReductionJob>,
    ranges: &[ComputationRange],
) -> Vec<thread::JoinHandle<()>> {
    ranges
        .iter()
        .enumerate()
        .map(|(worker_index, range)| {
            let job = Arc::clone(job);
            let range = *range;
            thread::spawn(move || {
                let product = compute_partial_product(&job, range);
                job.submit_partial(worker_index, product);
            })
        })
        .collect()
}

/// 担当範囲の積を計算する。空範囲は乗法単位元を返す
fn compute_partial_product(job: &ReductionJob, range: ComputationRange) -> BigUint {
    let mut product = BigUint::one();
    for num in range.start..=range.end {
        if job.is_timed_out() {
            break;
        }
        product *= num;
    }
    product
}
