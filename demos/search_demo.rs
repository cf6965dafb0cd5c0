//! 演示如何在 library 模式下使用 bioinfotools。
//!
//! 运行方式：
//! ```bash
//! cargo run --example search_demo
//! ```

use std::num::NonZeroUsize;

use bioinfotools::index::bwt;
use bioinfotools::index::cache::SuffixTreeCache;
use bioinfotools::search::{self, SearchOpt, SearchStrategy};
use bioinfotools::stats;

fn main() -> bioinfotools::Result<()> {
    let reference = b"ACGTACGTAGCTGATCGTAGCTAGCTAGCTGATCGTAGCTAGCTAGCTGAT";
    println!("参考序列: {}", String::from_utf8_lossy(reference));
    println!("参考长度: {} bp", reference.len());

    // 1. 前缀数组
    let pattern = b"GCTGATC";
    println!("\nZ({}) = {:?}", String::from_utf8_lossy(pattern), search::z_array(pattern));
    println!("LPS({}) = {:?}", String::from_utf8_lossy(pattern), search::lps_array(pattern));

    // 2. 三种策略精确匹配，结果一致
    for strategy in [SearchStrategy::Naive, SearchStrategy::Z, SearchStrategy::Kmp] {
        let opt = SearchOpt { strategy, ..SearchOpt::default() };
        let hits = search::find_all(pattern, reference, opt)?;
        println!("{:?}: {:?}", strategy, hits);
    }

    // 3. 后缀树（经缓存）
    let mut cache = SuffixTreeCache::new(NonZeroUsize::new(8).unwrap_or(NonZeroUsize::MIN));
    let tree = cache.get_or_build(reference);
    println!("\n后缀树: {} 个节点, 'TAGC' -> {:?}", tree.node_count(), tree.search(b"TAGC"));

    // 4. BWT 往返
    let encoded = bwt::encode(reference, bwt::DEFAULT_SENTINEL)?;
    println!("\nBWT: {}", String::from_utf8_lossy(&encoded));
    let decoded = bwt::decode(&encoded, bwt::DEFAULT_SENTINEL)?;
    println!("还原: {}", String::from_utf8_lossy(&decoded));

    // 5. GC 偏斜
    println!("\n最小 GC 偏斜位置: {:?}", stats::minimum_gc_skew(reference));
    Ok(())
}
