use crate::error::{Error, Result};

/// DNA 碱基，按字母序
pub const BASES: [u8; 4] = *b"ACGT";

/// 有限字母表：符号列表及其反查表。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
    index: [Option<u8>; 256],
}

impl Alphabet {
    /// 由符号列表构造，重复符号只保留第一次出现。
    pub fn new(symbols: &[u8]) -> Self {
        let mut index = [None; 256];
        let mut uniq = Vec::with_capacity(symbols.len());
        for &s in symbols {
            if index[s as usize].is_none() {
                index[s as usize] = Some(uniq.len() as u8);
                uniq.push(s);
            }
        }
        Self { symbols: uniq, index }
    }

    pub fn dna() -> Self {
        Self::new(&BASES)
    }

    #[inline]
    pub fn rank(&self, symbol: u8) -> Option<usize> {
        self.index[symbol as usize].map(usize::from)
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// 检查 `seq` 中所有符号都在字母表内；`sequence` 仅用于报错定位。
    pub fn validate(&self, seq: &[u8], sequence: usize) -> Result<()> {
        match seq.iter().position(|&b| self.rank(b).is_none()) {
            Some(position) => Err(Error::SymbolNotInAlphabet { symbol: seq[position], sequence, position }),
            None => Ok(()),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::dna()
    }
}

pub fn normalize_seq(seq: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len());
    for &b in seq {
        let up = b.to_ascii_uppercase();
        let nb = match up {
            b'A' | b'C' | b'G' | b'T' | b'N' => up,
            b'U' => b'T',
            _ => b'N',
        };
        out.push(nb);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_ranks_follow_input_order() {
        let a = Alphabet::new(b"TGCA");
        assert_eq!(a.rank(b'T'), Some(0));
        assert_eq!(a.rank(b'A'), Some(3));
        assert_eq!(a.rank(b'N'), None);
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn alphabet_drops_duplicates() {
        let a = Alphabet::new(b"ACAC");
        assert_eq!(a.symbols(), b"AC");
    }

    #[test]
    fn validate_reports_first_foreign_symbol() {
        let err = Alphabet::dna().validate(b"ACGNT", 2).unwrap_err();
        assert!(matches!(err, Error::SymbolNotInAlphabet { symbol: b'N', sequence: 2, position: 3 }));
        assert!(Alphabet::dna().validate(b"GATTACA", 0).is_ok());
    }

    #[test]
    fn normalize_maps_rna_and_unknowns() {
        assert_eq!(normalize_seq(b"acgu-x"), b"ACGTNN");
    }
}
