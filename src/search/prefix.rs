/// 计算 Z 数组。
///
/// `z[i]` 为从 `seq[i]` 开始、同时也是 `seq` 前缀的最长子串长度。
/// 约定 `z[0] = 0`（而不是整个序列长度）。
///
/// 维护半开窗口 `[left, right)`：目前已知的、向右延伸最远的前缀匹配段。
/// 位于窗口内的位置先从镜像位置 `i - left` 取初值，再逐字符延伸；
/// 所有延伸步数之和不超过 `right` 的推进量，故总体 O(n)。
pub fn z_array<T: PartialEq>(seq: &[T]) -> Vec<usize> {
    let n = seq.len();
    let mut z = vec![0usize; n];
    let mut left = 0usize;
    let mut right = 0usize;

    for i in 1..n {
        if i < right {
            z[i] = (right - i).min(z[i - left]);
        }
        while i + z[i] < n && seq[z[i]] == seq[i + z[i]] {
            z[i] += 1;
        }
        if i + z[i] > right {
            left = i;
            right = i + z[i];
        }
    }
    z
}

/// 计算 KMP 失配函数（LPS 数组）。
///
/// `lps[i]` 为 `pattern[..=i]` 的最长真前缀且同时为其后缀的长度，恒有 `lps[i] <= i`。
/// 失配时沿 `lps[len - 1]` 回退而不是从零重来，回退总量受已匹配长度约束，O(n)。
pub fn lps_array<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0usize; m];
    let mut len = 0usize;
    let mut i = 1usize;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }
    lps
}
