// 計算に関連するデータ型定義

use num_bigint::BigUint;

/// 1ワーカーが所有する計算範囲（両端を含む）
///
/// `start > end` の場合は空範囲を表し、ワーカーは乗法単位元を返す。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputationRange {
    pub start: u64,
    pub end: u64,
}

impl ComputationRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// 範囲に含まれる値の個数
    pub fn len(&self) -> u64 {
        if self.start > self.end {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 1回の並列階乗計算の最終結果
///
/// 中断とタイムアウトはエラーではなく終端状態として扱う。
/// タイムアウト済みの数値結果は決して `Factorial` として届かない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComputationOutcome {
    /// 計算成功（n! の値）
    Factorial(BigUint),
    /// 外部からの中断シグナルによる終了
    Aborted,
    /// 期限超過による終了
    TimedOut,
}

impl std::fmt::Display for ComputationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Factorial(value) => write!(f, "{value}"),
            Self::Aborted => write!(f, "Computation was aborted"),
            Self::TimedOut => write!(f, "Computation timed out"),
        }
    }
}

/// Producer/Consumerセッション全体のサマリー
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SessionSummary {
    pub message_count: usize,
    pub received_messages: usize,
    pub elapsed_ms: u64,
}
