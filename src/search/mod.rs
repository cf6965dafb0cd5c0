//! 精确匹配：前缀数组预处理与三种可互换的搜索策略。
//!
//! 三种策略对同一输入必须给出完全相同的升序起始位置列表。
//! 边界约定：空模式串匹配 `0..text.len()` 的每个位置，模式串长于文本时无匹配。

use rayon::prelude::*;

use crate::error::Result;

pub mod kmp;
pub mod naive;
pub mod prefix;
pub mod zalgo;

pub use kmp::kmp_search;
pub use naive::naive_search;
pub use prefix::{lps_array, z_array};
pub use zalgo::{z_search, DEFAULT_SEPARATOR};

/// 搜索策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SearchStrategy {
    /// 滑动窗口逐一比较，O(n·m)
    Naive,
    /// pattern + 分隔符 + text 的 Z 数组，O(n+m)
    Z,
    /// LPS 失配回退，O(n+m)
    #[default]
    Kmp,
}

impl SearchStrategy {
    /// 按策略搜索任意符号类型的序列。`separator` 仅 [`SearchStrategy::Z`] 使用。
    pub fn find_all<T: PartialEq>(self, pattern: &[T], text: &[T], separator: &T) -> Result<Vec<usize>> {
        match self {
            SearchStrategy::Naive => Ok(naive_search(pattern, text)),
            SearchStrategy::Z => z_search(pattern, text, separator),
            SearchStrategy::Kmp => Ok(kmp_search(pattern, text)),
        }
    }
}

/// 搜索参数
#[derive(Debug, Clone, Copy)]
pub struct SearchOpt {
    pub strategy: SearchStrategy,
    pub separator: u8,
}

impl Default for SearchOpt {
    fn default() -> Self {
        Self { strategy: SearchStrategy::default(), separator: DEFAULT_SEPARATOR }
    }
}

pub fn find_all(pattern: &[u8], text: &[u8], opt: SearchOpt) -> Result<Vec<usize>> {
    opt.strategy.find_all(pattern, text, &opt.separator)
}

/// 在同一文本上并行搜索多个模式串，结果顺序与输入一致。
pub fn find_all_batch<P>(patterns: &[P], text: &[u8], opt: SearchOpt) -> Result<Vec<Vec<usize>>>
where
    P: AsRef<[u8]> + Sync,
{
    patterns
        .par_iter()
        .map(|p| find_all(p.as_ref(), text, opt))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const STRATEGIES: [SearchStrategy; 3] = [SearchStrategy::Naive, SearchStrategy::Z, SearchStrategy::Kmp];

    fn make_text(len: usize, sigma: u32) -> Vec<u8> {
        let mut x: u32 = 7_654_321;
        let mut v = Vec::with_capacity(len);
        for _ in 0..len {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            v.push(b'a' + ((x >> 16) % sigma) as u8);
        }
        v
    }

    #[test]
    fn strategies_agree_on_pseudo_random_inputs() {
        let text = make_text(300, 3);
        for start in (0..280).step_by(17) {
            for len in 1..=6 {
                let pattern = &text[start..start + len];
                let expected = naive_search(pattern, &text);
                assert!(!expected.is_empty());
                for s in STRATEGIES {
                    let opt = SearchOpt { strategy: s, ..SearchOpt::default() };
                    assert_eq!(find_all(pattern, &text, opt).unwrap(), expected, "{:?} start={} len={}", s, start, len);
                }
            }
        }
    }

    #[test]
    fn strategies_agree_on_boundaries() {
        let cases: [(&[u8], &[u8]); 6] = [
            (b"", b"ACGT"),
            (b"", b""),
            (b"ACGTA", b"ACGT"),
            (b"ACGT", b"ACGT"),
            (b"TTT", b"ACGT"),
            (b"A", b""),
        ];
        for (pattern, text) in cases {
            let expected = naive_search(pattern, text);
            for s in STRATEGIES {
                assert_eq!(s.find_all(pattern, text, &DEFAULT_SEPARATOR).unwrap(), expected);
            }
        }
    }

    #[test]
    fn batch_preserves_pattern_order() {
        let text = b"ACGTACGTTACG";
        let patterns = ["ACG", "T", "GGG", ""];
        let hits = find_all_batch(&patterns, text, SearchOpt::default()).unwrap();
        assert_eq!(hits[0], vec![0, 4, 9]);
        assert_eq!(hits[1], vec![3, 7, 8]);
        assert!(hits[2].is_empty());
        assert_eq!(hits[3], (0..text.len()).collect::<Vec<_>>());
    }

    #[test]
    fn batch_surfaces_separator_error() {
        let opt = SearchOpt { strategy: SearchStrategy::Z, separator: b'T' };
        let err = find_all_batch(&["ACG"], b"ACGTACGT", opt).unwrap_err();
        assert!(matches!(err, Error::SeparatorInText { position: 3 }));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let text = make_text(120, 2);
        for s in STRATEGIES {
            let a = s.find_all(b"abab", &text, &b'$').unwrap();
            let b = s.find_all(b"abab", &text, &b'$').unwrap();
            assert_eq!(a, b);
        }
    }
}
