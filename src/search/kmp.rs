use super::prefix::lps_array;

/// KMP 匹配：双指针扫描文本，失配时借助模式串的 LPS 数组回退，O(n+m)。
///
/// 命中后沿 `lps[m - 1]` 回退继续扫描，因此能找到重叠匹配。
pub fn kmp_search<T: PartialEq>(pattern: &[T], text: &[T]) -> Vec<usize> {
    let m = pattern.len();
    let n = text.len();
    if m == 0 {
        return (0..n).collect();
    }
    if m > n {
        return Vec::new();
    }

    let lps = lps_array(pattern);
    let mut hits = Vec::new();
    let mut j = 0usize;
    for (i, sym) in text.iter().enumerate() {
        while j > 0 && *sym != pattern[j] {
            j = lps[j - 1];
        }
        if *sym == pattern[j] {
            j += 1;
        }
        if j == m {
            hits.push(i + 1 - m);
            j = lps[j - 1];
        }
    }
    hits
}
