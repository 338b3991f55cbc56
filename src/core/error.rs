// Custom error types for concurrent computation
// 並行計算専用のカスタムエラー型定義

use thiserror::Error;

/// 並行計算固有のエラー型
///
/// 中断・タイムアウトはエラーではなく `ComputationOutcome` の終端状態なので
/// ここには含まれない。
#[derive(Error, Debug)]
pub enum ComputeError {
    /// 計算開始前に検出される使用方法エラー（数値として解釈できないタイムアウト入力）
    #[error("タイムアウト指定が不正です: {input}")]
    InvalidTimeout { input: String },

    /// ブロック中の操作が外部から中断された（操作は放棄され、再試行はされない）
    #[error("待機中の操作が中断されました: {operation}")]
    Interrupted { operation: String },

    /// 結果配信チャンネルが閉じられた
    #[error("チャンネルエラー: {message}")]
    ChannelClosed { message: String },

    /// 計算タスクの実行エラー
    #[error("タスクエラー: {source}")]
    Task {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl ComputeError {
    /// 不正なタイムアウト入力エラーの作成
    pub fn invalid_timeout(input: impl Into<String>) -> Self {
        Self::InvalidTimeout {
            input: input.into(),
        }
    }

    /// 中断エラーの作成
    pub fn interrupted(operation: impl Into<String>) -> Self {
        Self::Interrupted {
            operation: operation.into(),
        }
    }

    /// チャンネルエラーの作成
    pub fn channel_closed(message: impl Into<String>) -> Self {
        Self::ChannelClosed {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::Task { source }
    }

    /// 呼び出し側の使用方法に起因するエラーかどうか
    ///
    /// 使用方法エラーは計算開始前に同期的に報告される。
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::InvalidTimeout { .. })
    }
}

impl From<tokio::task::JoinError> for ComputeError {
    fn from(source: tokio::task::JoinError) -> Self {
        Self::Task { source }
    }
}

/// 並行計算の結果型
pub type ComputeResult<T> = std::result::Result<T, ComputeError>;
