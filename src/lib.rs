// 並行計算プリミティブ
// 容量制限付きブロッキングキューと、中断・タイムアウト可能な並列階乗エンジン

pub mod cli;
pub mod core;
pub mod engine;
pub mod monitoring;
pub mod queue;
pub mod session;

// 公開API - 主要コンポーネント
pub use crate::core::{
    ComputationObserver, ComputationOutcome, ComputationRange, ComputeError, ComputeResult,
    DefaultEngineConfig, EngineConfig, SessionSummary,
};
pub use engine::{AbortHandle, ComputationHandle, FactorialEngine};
pub use monitoring::{ConsoleObserver, NoOpObserver};
pub use queue::BoundedBlockingQueue;
pub use session::{run_session, SessionConfig};
