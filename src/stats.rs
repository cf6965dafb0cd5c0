//! 序列组成统计：碱基计数与 GC 偏斜。

use std::collections::BTreeMap;

use crate::util::dna::Alphabet;

/// 按字母表顺序统计每个符号的出现次数；字母表外的符号忽略。
pub fn count_bases(text: &[u8], alphabet: &Alphabet) -> Vec<usize> {
    let mut counter = vec![0usize; alphabet.len()];
    for &c in text {
        if let Some(r) = alphabet.rank(c) {
            counter[r] += 1;
        }
    }
    counter
}

/// 同 [`count_bases`]，以符号为键返回。
pub fn base_counts(text: &[u8], alphabet: &Alphabet) -> BTreeMap<u8, usize> {
    alphabet
        .symbols()
        .iter()
        .copied()
        .zip(count_bases(text, alphabet))
        .collect()
}

#[inline]
fn skew_step(c: u8) -> i64 {
    match c.to_ascii_uppercase() {
        b'G' => 1,
        b'C' => -1,
        _ => 0,
    }
}

/// 累积 GC 偏斜（#G − #C），长度 `n + 1`，`skews[i]` 对应前缀 `text[..i]`。
pub fn gc_skews(text: &[u8]) -> Vec<i64> {
    let mut skews = Vec::with_capacity(text.len() + 1);
    let mut cur = 0i64;
    skews.push(cur);
    for &c in text {
        cur += skew_step(c);
        skews.push(cur);
    }
    skews
}

/// GC 偏斜取得最小值的全部前缀长度（1-based，升序）。空前缀不计入。
pub fn minimum_gc_skew(text: &[u8]) -> Vec<usize> {
    let mut min_skew: Option<i64> = None;
    let mut min_loc = Vec::new();
    let mut cur = 0i64;

    for (i, &c) in text.iter().enumerate() {
        cur += skew_step(c);
        match min_skew {
            Some(m) if cur == m => min_loc.push(i + 1),
            Some(m) if cur > m => {}
            _ => {
                min_skew = Some(cur);
                min_loc.clear();
                min_loc.push(i + 1);
            }
        }
    }
    min_loc
}
