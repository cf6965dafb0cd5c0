/// 构建后缀数组（倍增法，每轮一次 O(n log n) 排序）。
///
/// `keys` 为每个位置的符号秩，秩越小字典序越小。调用方负责把哨兵映射为
/// 最小秩（见 [`sentinel_keys`]），此时后缀顺序与循环旋转顺序一致。
pub fn build_sa(keys: &[u32]) -> Vec<u32> {
    let n = keys.len();
    if n == 0 {
        return Vec::new();
    }
    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<i64> = keys.iter().map(|&k| i64::from(k)).collect();
    let mut tmp: Vec<i64> = vec![0; n];

    let mut k = 1usize;
    loop {
        let key_at = |i: usize, rank: &[i64]| (rank[i], if i + k < n { rank[i + k] } else { -1 });
        sa.sort_unstable_by(|&i, &j| key_at(i, &rank).cmp(&key_at(j, &rank)));

        tmp[sa[0]] = 0;
        for w in 1..n {
            let a = sa[w - 1];
            let b = sa[w];
            tmp[b] = tmp[a] + i64::from(key_at(a, &rank) != key_at(b, &rank));
        }

        rank.copy_from_slice(&tmp);
        if rank[sa[n - 1]] as usize == n - 1 || k >= n {
            break;
        }
        k <<= 1;
    }

    sa.into_iter().map(|x| x as u32).collect()
}

/// 哨兵映射为 0，其余字节映射为 `byte + 1`，保证哨兵严格最小。
pub fn sentinel_keys(text: &[u8], sentinel: u8) -> Vec<u32> {
    text.iter()
        .map(|&b| if b == sentinel { 0 } else { u32::from(b) + 1 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_sa(keys: &[u32]) -> Vec<u32> {
        let n = keys.len();
        let mut suffixes: Vec<(usize, &[u32])> = (0..n).map(|i| (i, &keys[i..])).collect();
        suffixes.sort_by(|a, b| a.1.cmp(b.1));
        suffixes.into_iter().map(|(i, _)| i as u32).collect()
    }

    fn make_keys(len: usize) -> Vec<u32> {
        let mut x: u32 = 1_234_567;
        let mut v = Vec::with_capacity(len);
        for _ in 0..len {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            v.push((x >> 16) % 4 + 1);
        }
        v
    }

    #[test]
    fn sa_banana() {
        let keys = sentinel_keys(b"banana$", b'$');
        // 后缀字典序：$, a$, ana$, anana$, banana$, na$, nana$
        assert_eq!(build_sa(&keys), vec![6, 5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn sa_matches_naive_on_small_random_texts() {
        for len in 1..=40 {
            let mut keys = make_keys(len);
            keys.push(0);
            assert_eq!(build_sa(&keys), naive_sa(&keys), "mismatch on len={}", len);
        }
    }

    #[test]
    fn sa_without_terminal_sentinel() {
        let keys = [2u32, 2, 2, 2];
        assert_eq!(build_sa(&keys), naive_sa(&keys));
    }

    #[test]
    fn sentinel_sorts_first_even_when_byte_is_large() {
        let keys = sentinel_keys(b"ab~", b'~');
        assert_eq!(keys, vec![98, 99, 0]);
    }
}
