//! Burrows-Wheeler 变换的编码与解码。
//!
//! 编码：对带哨兵的文本的全部循环旋转排序（哨兵严格最小），取最后一列。
//! 解码：由排序后的首列与 LF（last-to-first）映射逆推出原文。

use std::borrow::Cow;
use std::cmp::Ordering;

use log::{debug, warn};

use crate::error::{Error, Result};

use super::sa;

/// 默认哨兵字符
pub const DEFAULT_SENTINEL: u8 = b'$';

/// 旋转排序法在这个长度以上给出提示（O(n²) 比较开销）
const ROTATION_SORT_WARN_LEN: usize = 1 << 14;

/// 编码方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BwtMethod {
    /// 直接对循环旋转排序
    #[default]
    Rotations,
    /// 由后缀数组读出最后一列
    SuffixArray,
}

impl BwtMethod {
    pub fn encode(self, text: &[u8], sentinel: u8) -> Result<Vec<u8>> {
        match self {
            BwtMethod::Rotations => encode(text, sentinel),
            BwtMethod::SuffixArray => encode_with_sa(text, sentinel),
        }
    }
}

/// 确保文本以唯一哨兵结尾：缺失则追加；仅出现在末尾则原样接受；其余情况报错。
fn terminate(text: &[u8], sentinel: u8) -> Result<Cow<'_, [u8]>> {
    match text.iter().position(|&c| c == sentinel) {
        None => {
            let mut owned = Vec::with_capacity(text.len() + 1);
            owned.extend_from_slice(text);
            owned.push(sentinel);
            Ok(Cow::Owned(owned))
        }
        Some(position) if position + 1 == text.len() => Ok(Cow::Borrowed(text)),
        Some(position) => Err(Error::MisplacedSentinel { sentinel, position }),
    }
}

#[inline]
fn symbol_key(c: u8, sentinel: u8) -> u16 {
    if c == sentinel { 0 } else { u16::from(c) + 1 }
}

fn cmp_rotations(text: &[u8], sentinel: u8, a: usize, b: usize) -> Ordering {
    let n = text.len();
    for k in 0..n {
        let x = symbol_key(text[(a + k) % n], sentinel);
        let y = symbol_key(text[(b + k) % n], sentinel);
        if x != y {
            return x.cmp(&y);
        }
    }
    Ordering::Equal
}

/// 旋转排序法编码。
///
/// 不显式物化 n 个旋转串，而是对旋转起点排序，比较时按循环下标取字符；
/// 最坏 O(n² log n) 时间、O(n) 辅助空间。大输入请用 [`encode_with_sa`]。
pub fn encode(text: &[u8], sentinel: u8) -> Result<Vec<u8>> {
    let text = terminate(text, sentinel)?;
    let n = text.len();
    if n > ROTATION_SORT_WARN_LEN {
        warn!("rotation-sort BWT on {} symbols is quadratic; consider the suffix-array method", n);
    }

    let mut rotations: Vec<usize> = (0..n).collect();
    rotations.sort_by(|&a, &b| cmp_rotations(&text, sentinel, a, b));

    debug!("encoded {} symbols by rotation sort", n);
    Ok(last_column(&text, rotations))
}

/// 按排好序的旋转起点读出末列：起点 `r` 对应字符 `text[r - 1]`（循环）。
fn last_column(text: &[u8], starts: impl IntoIterator<Item = usize>) -> Vec<u8> {
    let n = text.len();
    starts.into_iter().map(|r| text[(r + n - 1) % n]).collect()
}

/// 后缀数组法编码，输出与 [`encode`] 完全一致。
///
/// 哨兵唯一且位于末尾并严格最小，后缀顺序即等于循环旋转顺序。
pub fn encode_with_sa(text: &[u8], sentinel: u8) -> Result<Vec<u8>> {
    let text = terminate(text, sentinel)?;
    let keys = sa::sentinel_keys(&text, sentinel);
    let sa_arr = sa::build_sa(&keys);
    debug!("encoded {} symbols via suffix array", text.len());
    Ok(last_column(&text, sa_arr.into_iter().map(|p| p as usize)))
}

/// 解码 BWT，返回以哨兵结尾的原文。
///
/// 首列中哨兵排第一，其余字节升序。扫描 `transform` 时字符 `c` 的第 k 次出现
/// 映射到首列位置 `first[c] + k`；从第 0 行起沿该映射回溯直到遇到哨兵，
/// 收集到的字符反转即为原文。
pub fn decode(transform: &[u8], sentinel: u8) -> Result<Vec<u8>> {
    let n = transform.len();
    if n == 0 {
        return Err(Error::EmptyTransform);
    }

    let mut counts = [0usize; 256];
    for &c in transform {
        counts[c as usize] += 1;
    }
    match counts[sentinel as usize] {
        0 => return Err(Error::SentinelNotFound { sentinel }),
        1 => {}
        count => return Err(Error::RepeatedSentinel { sentinel, count }),
    }

    // first[c]：字符 c 在首列中的第一次出现位置
    let mut first = [0usize; 256];
    let mut acc = counts[sentinel as usize];
    for c in 0..256usize {
        if c == sentinel as usize {
            continue;
        }
        first[c] = acc;
        acc += counts[c];
    }

    let mut seen = [0usize; 256];
    let mut lf = Vec::with_capacity(n);
    for &c in transform {
        let ci = c as usize;
        lf.push(first[ci] + seen[ci]);
        seen[ci] += 1;
    }

    let mut out = Vec::with_capacity(n);
    out.push(sentinel);
    let mut idx = 0usize;
    while transform[idx] != sentinel {
        if out.len() == n {
            return Err(Error::MalformedTransform { recovered: out.len(), expected: n });
        }
        out.push(transform[idx]);
        idx = lf[idx];
    }
    if out.len() != n {
        return Err(Error::MalformedTransform { recovered: out.len(), expected: n });
    }

    out.reverse();
    Ok(out)
}
