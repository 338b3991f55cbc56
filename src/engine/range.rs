// 計算範囲の分割
// [1, n] をワーカー数ぶんの連続チャンクに分割する

use crate::core::types::ComputationRange;

/// 引数に応じたワーカー数を選択する
///
/// しきい値未満の引数は並列化のオーバーヘッドに見合わないため1ワーカー、
/// それ以外は利用可能なハードウェア並列度を使う。
pub fn worker_count_for(argument: u32, small_argument_threshold: u32) -> usize {
    if argument < small_argument_threshold {
        1
    } else {
        num_cpus::get()
    }
}

/// `[1, argument]` を `worker_count` 個の連続範囲に分割する
///
/// チャンク境界は範囲の末尾から先頭へ向かって `argument / worker_count` 刻みで
/// 計算し、最後に先頭ワーカーのstartを1に強制する。割り切れない余りは
/// すべて先頭ワーカー（最小インデックス）の範囲に吸収される。
///
/// 生成された範囲は重複も欠落もなく `[1, argument]` を正確に被覆する。
/// `argument == 0` のときだけ空範囲 `(1, 0)` が生じ、そのワーカーは
/// 乗法単位元を返す。
pub fn partition_ranges(argument: u32, worker_count: usize) -> Vec<ComputationRange> {
    debug_assert!(worker_count >= 1);

    let range_size = i64::from(argument) / worker_count as i64;

    let mut ranges = vec![ComputationRange::new(0, 0); worker_count];
    let mut next_range_end = i64::from(argument);
    for i in (0..worker_count).rev() {
        ranges[i] = ComputationRange::new(
            (next_range_end - range_size + 1).max(1) as u64,
            next_range_end.max(0) as u64,
        );
        next_range_end = ranges[i].start as i64 - 1;
    }

    // 余りの値をすべて先頭ワーカーの範囲に寄せる
    ranges[0].start = 1;

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 範囲列が [1, n] を過不足なく被覆することを検証する
    fn assert_exact_coverage(ranges: &[ComputationRange], n: u64) {
        let mut expected_start = 1;
        for range in ranges {
            if range.is_empty() {
                continue;
            }
            assert_eq!(range.start, expected_start);
            expected_start = range.end + 1;
        }
        assert_eq!(expected_start, n + 1);
    }

    #[test]
    fn test_single_worker_covers_whole_range() {
        let ranges = partition_ranges(19, 1);
        assert_eq!(ranges, vec![ComputationRange::new(1, 19)]);
    }

    #[test]
    fn test_zero_argument_yields_empty_range() {
        let ranges = partition_ranges(0, 1);
        assert_eq!(ranges.len(), 1);
        assert!(ranges[0].is_empty());
    }

    #[test]
    fn test_even_split() {
        let ranges = partition_ranges(100, 4);
        assert_eq!(
            ranges,
            vec![
                ComputationRange::new(1, 25),
                ComputationRange::new(26, 50),
                ComputationRange::new(51, 75),
                ComputationRange::new(76, 100),
            ]
        );
    }

    #[test]
    fn test_remainder_accrues_to_first_worker() {
        // 100 / 8 = 12、余り4はすべて先頭ワーカーに寄る
        let ranges = partition_ranges(100, 8);
        assert_eq!(ranges.len(), 8);
        assert_eq!(ranges[0], ComputationRange::new(1, 16));
        for range in &ranges[1..] {
            assert_eq!(range.len(), 12);
        }
        assert_exact_coverage(&ranges, 100);
    }

    #[test]
    fn test_exact_coverage_across_grid() {
        for n in [1u32, 2, 7, 19, 20, 99, 100, 1000] {
            for worker_count in [1usize, 2, 3, 4, 7, 8] {
                if worker_count as u32 > n {
                    continue;
                }
                let ranges = partition_ranges(n, worker_count);
                assert_eq!(ranges.len(), worker_count);
                assert_exact_coverage(&ranges, u64::from(n));

                // 先頭以外のチャンクはすべて floor(n / worker_count) サイズ
                let chunk = u64::from(n) / worker_count as u64;
                for range in &ranges[1..] {
                    assert_eq!(range.len(), chunk, "n={n} workers={worker_count}");
                }
            }
        }
    }

    #[test]
    fn test_worker_count_selection() {
        assert_eq!(worker_count_for(0, 20), 1);
        assert_eq!(worker_count_for(19, 20), 1);
        assert_eq!(worker_count_for(20, 20), num_cpus::get());
        assert_eq!(worker_count_for(1000, 20), num_cpus::get());
    }
}
