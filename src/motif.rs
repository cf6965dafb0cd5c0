//! 贪心模体搜索（profile-most-probable k-mer，伪计数为 1）。

use log::debug;
use num_bigint::BigUint;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::util::dna::Alphabet;

/// 模体搜索参数
#[derive(Debug, Clone)]
pub struct MotifOpt {
    /// 模体长度
    pub k: usize,
    pub alphabet: Alphabet,
}

/// 计数 profile：`counts[symbol_rank][column]`，初始值为伪计数 1。
///
/// 权重为各列计数之积，用 [`BigUint`] 精确表示；k 较大时 u128 也会溢出。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    counts: Vec<Vec<u32>>,
    alphabet: Alphabet,
}

impl Profile {
    /// 长度为 `k`、所有计数为 1 的 profile。`k == 0` 或字母表为空时报错。
    pub fn with_pseudocounts(k: usize, alphabet: &Alphabet) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidMotifParams("k must be positive".to_string()));
        }
        if alphabet.is_empty() {
            return Err(Error::InvalidMotifParams("alphabet is empty".to_string()));
        }
        Ok(Self { counts: vec![vec![1; k]; alphabet.len()], alphabet: alphabet.clone() })
    }

    pub fn k(&self) -> usize {
        self.counts.first().map_or(0, Vec::len)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn check_len(&self, kmer: &[u8]) -> Result<()> {
        if kmer.len() != self.k() {
            return Err(Error::InvalidMotifParams(format!(
                "k-mer has length {}, profile expects {}",
                kmer.len(),
                self.k()
            )));
        }
        Ok(())
    }

    /// 将 `kmer` 计入 profile。长度须为 k，符号须在字母表内。
    pub fn add(&mut self, kmer: &[u8]) -> Result<()> {
        self.check_len(kmer)?;
        self.alphabet.validate(kmer, 0)?;
        for (col, &c) in kmer.iter().enumerate() {
            if let Some(r) = self.alphabet.rank(c) {
                self.counts[r][col] += 1;
            }
        }
        Ok(())
    }

    /// k-mer 在 profile 下的（未归一化）权重：各列计数之积。
    ///
    /// 字母表外的符号贡献 0。
    pub fn weight(&self, kmer: &[u8]) -> Result<BigUint> {
        self.check_len(kmer)?;
        Ok(self.weight_unchecked(kmer))
    }

    fn weight_unchecked(&self, kmer: &[u8]) -> BigUint {
        let mut acc = BigUint::from(1u32);
        for (col, &c) in kmer.iter().enumerate() {
            match self.alphabet.rank(c) {
                Some(r) => acc *= self.counts[r][col],
                None => return BigUint::from(0u32),
            }
        }
        acc
    }

    /// `seq` 中权重最大的 k-mer，并列时取最靠左者。`seq` 短于 k 时报错。
    pub fn most_probable<'a>(&self, seq: &'a [u8]) -> Result<&'a [u8]> {
        let k = self.k();
        if seq.len() < k {
            return Err(Error::InvalidMotifParams(format!(
                "sequence has length {}, shorter than k={}",
                seq.len(),
                k
            )));
        }
        let mut best = &seq[..k];
        let mut best_val = self.weight_unchecked(best);
        for w in seq.windows(k).skip(1) {
            let v = self.weight_unchecked(w);
            if v > best_val {
                best_val = v;
                best = w;
            }
        }
        Ok(best)
    }
}

/// 模体集合得分：每列 `t - 最多符号计数` 之和，越小越保守。
///
/// 计数使用与 profile 相同的字母表；字母表外的符号报错。
pub fn score<M: AsRef<[u8]>>(motifs: &[M], alphabet: &Alphabet) -> Result<usize> {
    let Some(first) = motifs.first() else {
        return Ok(0);
    };
    let k = first.as_ref().len();
    let t = motifs.len();
    for (si, m) in motifs.iter().enumerate() {
        let m = m.as_ref();
        if m.len() != k {
            return Err(Error::InvalidMotifParams(format!(
                "motif {} has length {}, expected {}",
                si,
                m.len(),
                k
            )));
        }
        alphabet.validate(m, si)?;
    }

    let mut total = 0usize;
    let mut counter = vec![0usize; alphabet.len()];
    for col in 0..k {
        counter.iter_mut().for_each(|c| *c = 0);
        for m in motifs {
            if let Some(r) = alphabet.rank(m.as_ref()[col]) {
                counter[r] += 1;
            }
        }
        total += t - counter.iter().copied().max().unwrap_or(0);
    }
    Ok(total)
}

fn validate_input<S: AsRef<[u8]>>(sequences: &[S], opt: &MotifOpt) -> Result<()> {
    if opt.k == 0 {
        return Err(Error::InvalidMotifParams("k must be positive".to_string()));
    }
    if sequences.is_empty() {
        return Err(Error::InvalidMotifParams("no sequences given".to_string()));
    }
    if opt.alphabet.is_empty() {
        return Err(Error::InvalidMotifParams("alphabet is empty".to_string()));
    }
    for (si, s) in sequences.iter().enumerate() {
        let s = s.as_ref();
        if s.len() < opt.k {
            return Err(Error::InvalidMotifParams(format!(
                "sequence {} has length {}, shorter than k={}",
                si,
                s.len(),
                opt.k
            )));
        }
        opt.alphabet.validate(s, si)?;
    }
    Ok(())
}

/// 贪心模体搜索。
///
/// 以第一条序列的每个 k-mer 为种子建立 profile，依次从其余序列中选出
/// profile 下最可能的 k-mer 并更新 profile；得分严格更低的模体集合替换当前最优
/// （初始最优为各序列的首个 k-mer）。种子之间相互独立，并行评估；
/// 选择按种子顺序进行，结果确定。
pub fn greedy_motif_search<S>(sequences: &[S], opt: &MotifOpt) -> Result<Vec<Vec<u8>>>
where
    S: AsRef<[u8]> + Sync,
{
    validate_input(sequences, opt)?;
    let k = opt.k;
    let alphabet = &opt.alphabet;
    let seqs: Vec<&[u8]> = sequences.iter().map(AsRef::as_ref).collect();

    let mut best: Vec<&[u8]> = seqs.iter().map(|s| &s[..k]).collect();
    let mut best_score = score(&best, alphabet)?;

    let first = seqs[0];
    let candidates = (0..=first.len() - k)
        .into_par_iter()
        .map(|i| {
            let seed = &first[i..i + k];
            let mut profile = Profile::with_pseudocounts(k, alphabet)?;
            profile.add(seed)?;
            let mut motifs = Vec::with_capacity(seqs.len());
            motifs.push(seed);
            for s in &seqs[1..] {
                let m = profile.most_probable(s)?;
                profile.add(m)?;
                motifs.push(m);
            }
            let sc = score(&motifs, alphabet)?;
            Ok::<_, Error>((motifs, sc))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("greedy motif search: {} seeds, k={}, t={}", candidates.len(), k, seqs.len());
    for (motifs, sc) in candidates {
        if sc < best_score {
            best_score = sc;
            best = motifs;
        }
    }

    Ok(best.into_iter().map(<[u8]>::to_vec).collect())
}
