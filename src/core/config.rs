// エンジン設定の具象実装
// デフォルト値とタイムアウト入力の解決を提供

use super::error::{ComputeError, ComputeResult};
use super::traits::EngineConfig;
use std::time::Duration;

/// タイムアウト未指定時のデフォルト値（ミリ秒）
pub const DEFAULT_FACTORIAL_TIMEOUT_MS: u64 = 10_000;
/// タイムアウトの上限値（ミリ秒）
pub const MAX_FACTORIAL_TIMEOUT_MS: u64 = 30_000;
/// この値未満の引数は1ワーカーで計算する（並列化のオーバーヘッドに見合わない）
pub const SMALL_ARGUMENT_THRESHOLD: u32 = 20;

/// Producer/Consumerセッションのデフォルトキュー容量
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;
/// セッションのデフォルトメッセージ数
pub const DEFAULT_SESSION_MESSAGES: usize = 100;
/// Producerがメッセージ送信前に待機するデフォルト時間（ミリ秒）
pub const DEFAULT_PRODUCER_DELAY_MS: u64 = 10;

/// デフォルトのエンジン設定実装
#[derive(Debug, Clone)]
pub struct DefaultEngineConfig {
    default_timeout_ms: u64,
    max_timeout_ms: u64,
    small_argument_threshold: u32,
}

impl Default for DefaultEngineConfig {
    fn default() -> Self {
        Self {
            default_timeout_ms: DEFAULT_FACTORIAL_TIMEOUT_MS,
            max_timeout_ms: MAX_FACTORIAL_TIMEOUT_MS,
            small_argument_threshold: SMALL_ARGUMENT_THRESHOLD,
        }
    }
}

impl DefaultEngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// デフォルトタイムアウトを設定
    pub fn with_default_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.default_timeout_ms = timeout_ms;
        self
    }

    /// タイムアウト上限を設定
    pub fn with_max_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.max_timeout_ms = timeout_ms;
        self
    }

    /// 並列化しきい値を設定
    pub fn with_small_argument_threshold(mut self, threshold: u32) -> Self {
        self.small_argument_threshold = threshold;
        self
    }
}

impl EngineConfig for DefaultEngineConfig {
    fn default_timeout_ms(&self) -> u64 {
        self.default_timeout_ms
    }

    fn max_timeout_ms(&self) -> u64 {
        self.max_timeout_ms
    }

    fn small_argument_threshold(&self) -> u32 {
        self.small_argument_threshold
    }
}

/// ユーザー入力のタイムアウト文字列を解決する
///
/// 空入力はデフォルト値、数値入力は上限までクランプ、
/// 数値として解釈できない入力は計算開始前の使用方法エラーになる。
pub fn resolve_timeout_input(
    user_input: Option<&str>,
    config: &dyn EngineConfig,
) -> ComputeResult<Duration> {
    let timeout_ms = match user_input.map(str::trim) {
        None | Some("") => config.default_timeout_ms(),
        Some(input) => input
            .parse::<u64>()
            .map_err(|_| ComputeError::invalid_timeout(input))?,
    };

    Ok(Duration::from_millis(
        timeout_ms.min(config.max_timeout_ms()),
    ))
}

/// 明示的に渡されたタイムアウトを上限までクランプする
pub fn clamp_timeout(timeout: Duration, config: &dyn EngineConfig) -> Duration {
    timeout.min(Duration::from_millis(config.max_timeout_ms()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = DefaultEngineConfig::new();
        assert_eq!(config.default_timeout_ms(), DEFAULT_FACTORIAL_TIMEOUT_MS);
        assert_eq!(config.max_timeout_ms(), MAX_FACTORIAL_TIMEOUT_MS);
        assert_eq!(config.small_argument_threshold(), SMALL_ARGUMENT_THRESHOLD);
    }

    #[test]
    fn test_builder_methods() {
        let config = DefaultEngineConfig::new()
            .with_default_timeout_ms(100)
            .with_max_timeout_ms(200)
            .with_small_argument_threshold(50);

        assert_eq!(config.default_timeout_ms(), 100);
        assert_eq!(config.max_timeout_ms(), 200);
        assert_eq!(config.small_argument_threshold(), 50);
    }

    #[test]
    fn test_empty_input_uses_default() {
        let config = DefaultEngineConfig::new();

        let timeout = resolve_timeout_input(None, &config).unwrap();
        assert_eq!(timeout, Duration::from_millis(DEFAULT_FACTORIAL_TIMEOUT_MS));

        let timeout = resolve_timeout_input(Some(""), &config).unwrap();
        assert_eq!(timeout, Duration::from_millis(DEFAULT_FACTORIAL_TIMEOUT_MS));
    }

    #[test]
    fn test_numeric_input_clamped_to_max() {
        let config = DefaultEngineConfig::new();

        let timeout = resolve_timeout_input(Some("5000"), &config).unwrap();
        assert_eq!(timeout, Duration::from_millis(5000));

        // 上限を超える入力はクランプされる
        let timeout = resolve_timeout_input(Some("999999999"), &config).unwrap();
        assert_eq!(timeout, Duration::from_millis(MAX_FACTORIAL_TIMEOUT_MS));
    }

    #[test]
    fn test_non_numeric_input_is_usage_error() {
        let config = DefaultEngineConfig::new();

        let error = resolve_timeout_input(Some("abc"), &config).unwrap_err();
        assert!(error.is_usage_error());
        assert!(error.to_string().contains("abc"));
    }

    #[test]
    fn test_clamp_timeout() {
        let config = DefaultEngineConfig::new().with_max_timeout_ms(1000);

        assert_eq!(
            clamp_timeout(Duration::from_millis(500), &config),
            Duration::from_millis(500)
        );
        assert_eq!(
            clamp_timeout(Duration::from_secs(60), &config),
            Duration::from_millis(1000)
        );
    }
}
