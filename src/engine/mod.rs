// エンジン層 - 並列階乗計算のオーケストレーション
// 範囲分割・ワーカー実行・3条件競合の解決を組み合わせる

pub mod api;
mod coordinator;
pub mod job;
pub mod range;
mod worker; // ジョブ組み立て内部でのみ使用

// 公開API - 主要エンジンクラス
pub use api::{ComputationHandle, FactorialEngine};
pub use job::{AbortHandle, ReductionJob};
pub use range::{partition_ranges, worker_count_for};
