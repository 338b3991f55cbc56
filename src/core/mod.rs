// コアレイヤー - 基盤となるトレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use config::{clamp_timeout, resolve_timeout_input, DefaultEngineConfig};
pub use error::{ComputeError, ComputeResult};
pub use traits::{ComputationObserver, EngineConfig};
pub use types::{ComputationOutcome, ComputationRange, SessionSummary};
