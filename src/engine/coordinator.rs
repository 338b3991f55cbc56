// コーディネーター - 完了・中断・期限切れの3条件競合の解決と結果集約

use super::job::ReductionJob;
use crate::core::types::ComputationOutcome;
use num_bigint::BigUint;
use num_traits::One;

/// 全ワーカー完了・中断・期限切れのいずれかが起きるまでブロックする
///
/// 待機は毎回、期限までの残り時間ちょうどで再武装する
/// （固定間隔のポーリングではない）。
pub(crate) fn wait_for_completion(job: &ReductionJob) {
    let mut state = job.lock_state();
    while state.finished != job.worker_count() && !state.aborted && !job.is_timed_out() {
        let remaining = job.remaining_time();
        if remaining.is_zero() {
            break;
        }
        state = job.wait_on_progress(state, remaining);
    }
}

/// 待機終了後のジョブ状態から最終結果を導出する
///
/// 優先順位: (1) 中断なら部分結果を組み合わせず `Aborted`、
/// (2) 部分積をインデックス昇順で乗算（期限超過を検出したステップ以降は
/// 何もしないフォールドとして読み飛ばす）、(3) 集約自体が期限をまたぐ
/// 可能性があるため、集約後にもう一度期限を確認し、超過していれば
/// 数値が得られていても `TimedOut` を返す。
pub(crate) fn resolve_outcome(job: &ReductionJob) -> ComputationOutcome {
    let state = job.lock_state();

    if state.aborted {
        return ComputationOutcome::Aborted;
    }

    let mut result = BigUint::one();
    for partial in &state.partial_results {
        if job.is_timed_out() {
            break;
        }
        // 未提出スロットは期限切れ経路でのみ現れるため、no-opとして読み飛ばす
        if let Some(product) = partial {
            result *= product;
        }
    }

    // 集約も時間を消費するため、最終結果の計算後に期限を再確認する
    if job.is_timed_out() {
        return ComputationOutcome::TimedOut;
    }

    ComputationOutcome::Factorial(result)
}
