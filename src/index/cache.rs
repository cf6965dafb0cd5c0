use std::hash::Hasher;
use std::num::NonZeroUsize;
use std::sync::Arc;

use log::debug;
use lru::LruCache;
use rustc_hash::FxHasher;

use super::suffix_tree::SuffixTree;

/// 文本的 64 位摘要，作为缓存键
pub fn digest(text: &[u8]) -> u64 {
    let mut h = FxHasher::default();
    h.write_usize(text.len());
    h.write(text);
    h.finish()
}

/// 命中统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// 调用方持有的后缀树缓存。
///
/// 以文本摘要为键、LRU 淘汰；相同文本重复 `get_or_build` 返回同一个 `Arc`。
/// 命中时校验原文，摘要碰撞会重建并覆盖旧条目。
pub struct SuffixTreeCache {
    entries: LruCache<u64, Arc<SuffixTree>>,
    stats: CacheStats,
}

impl SuffixTreeCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self { entries: LruCache::new(capacity), stats: CacheStats::default() }
    }

    pub fn get_or_build(&mut self, text: &[u8]) -> Arc<SuffixTree> {
        let key = digest(text);
        if let Some(tree) = self.entries.get(&key) {
            if tree.text() == text {
                self.stats.hits += 1;
                return Arc::clone(tree);
            }
            debug!("digest collision on {:016x}, rebuilding", key);
        }
        self.stats.misses += 1;
        let tree = Arc::new(SuffixTree::build(text));
        debug!("cached suffix tree for {:016x} ({} nodes)", key, tree.node_count());
        self.entries.put(key, Arc::clone(&tree));
        tree
    }

    /// 移除 `text` 对应的条目
    pub fn evict(&mut self, text: &[u8]) -> Option<Arc<SuffixTree>> {
        let key = digest(text);
        let owned = self.entries.peek(&key).is_some_and(|tree| tree.text() == text);
        if owned {
            self.entries.pop(&key)
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(cap: usize) -> SuffixTreeCache {
        SuffixTreeCache::new(NonZeroUsize::new(cap).unwrap())
    }

    #[test]
    fn same_text_returns_same_instance() {
        let mut c = cache(4);
        let a = c.get_or_build(b"banana");
        let b = c.get_or_build(b"banana");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(c.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn different_texts_get_different_trees() {
        let mut c = cache(4);
        let a = c.get_or_build(b"banana");
        let b = c.get_or_build(b"bandana");
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(b.search(b"and"), vec![2]);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn lru_eviction_respects_capacity() {
        let mut c = cache(2);
        let first = c.get_or_build(b"AAA");
        c.get_or_build(b"CCC");
        c.get_or_build(b"GGG");
        assert_eq!(c.len(), 2);
        assert_eq!(c.capacity(), 2);
        // "AAA" 已被淘汰，再次获取会重建
        let again = c.get_or_build(b"AAA");
        assert!(!Arc::ptr_eq(&first, &again));
        assert_eq!(c.stats().misses, 4);
    }

    #[test]
    fn explicit_evict_and_clear() {
        let mut c = cache(4);
        c.get_or_build(b"ACGT");
        c.get_or_build(b"TTTT");
        assert!(c.evict(b"ACGT").is_some());
        assert!(c.evict(b"ACGT").is_none());
        assert_eq!(c.len(), 1);
        c.clear();
        assert!(c.is_empty());
    }

    #[test]
    fn digest_distinguishes_lengths() {
        assert_ne!(digest(b""), digest(b"\0"));
        assert_eq!(digest(b"ACGT"), digest(b"ACGT"));
    }
}
