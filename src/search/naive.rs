/// 朴素匹配：以 `pattern.len()` 为窗口滑过 `text` 逐一比较，O(n·m)。
///
/// 空模式串匹配 `0..text.len()` 的每个位置；模式串长于文本时无匹配。
pub fn naive_search<T: PartialEq>(pattern: &[T], text: &[T]) -> Vec<usize> {
    let m = pattern.len();
    let n = text.len();
    if m == 0 {
        return (0..n).collect();
    }
    if m > n {
        return Vec::new();
    }
    text.windows(m)
        .enumerate()
        .filter(|(_, w)| *w == pattern)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naive_basic() {
        assert_eq!(naive_search(b"GATA", b"CGATATATCCATAGATATA"), vec![1, 13]);
        assert_eq!(naive_search(b"ATA", b"GATATATGCATATACTT"), vec![1, 3, 9, 11]);
    }

    #[test]
    fn naive_boundaries() {
        assert_eq!(naive_search(b"", b"abc"), vec![0, 1, 2]);
        assert!(naive_search(b"", b"").is_empty());
        assert!(naive_search(b"abcd", b"abc").is_empty());
        assert_eq!(naive_search(b"abc", b"abc"), vec![0]);
        assert!(naive_search(b"x", b"abc").is_empty());
    }
}
