use std::collections::BTreeMap;
use std::io::Write;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// 索引构建元信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndexMeta {
    pub source_file: Option<String>,
    pub build_args: Option<String>,
    pub build_timestamp: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Node {
    /// 符号 -> 子节点下标（nodes 数组）
    children: BTreeMap<u8, u32>,
    /// 经过该节点的后缀起点，升序
    indexes: Vec<u32>,
}

/// 朴素后缀 trie：逐个插入 `text[i..]`，每个节点记录经过它的全部后缀起点。
///
/// 构建 O(n²) 时间与空间，仅适合短文本；查询 O(m + occ)。
#[derive(Debug, Serialize, Deserialize)]
pub struct SuffixTree {
    text: Vec<u8>,
    /// nodes[0] 为根
    nodes: Vec<Node>,
    meta: Option<IndexMeta>,
}

impl SuffixTree {
    pub fn build(text: &[u8]) -> Self {
        let n = text.len();
        let root = Node { children: BTreeMap::new(), indexes: (0..n as u32).collect() };
        let mut tree = Self { text: text.to_vec(), nodes: vec![root], meta: None };
        for i in 0..n {
            tree.insert_suffix(i);
        }
        tree
    }

    fn insert_suffix(&mut self, start: usize) {
        let mut node = 0usize;
        for pos in start..self.text.len() {
            let c = self.text[pos];
            let next = match self.nodes[node].children.get(&c) {
                Some(&child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(c, child as u32);
                    child
                }
            };
            node = next;
            self.nodes[node].indexes.push(start as u32);
        }
    }

    fn find_node(&self, pattern: &[u8]) -> Option<&Node> {
        let mut node = &self.nodes[0];
        for c in pattern {
            let &child = node.children.get(c)?;
            node = &self.nodes[child as usize];
        }
        Some(node)
    }

    /// 返回 `pattern` 在文本中的全部起始位置（升序）。空模式串匹配每个位置。
    pub fn search(&self, pattern: &[u8]) -> Vec<usize> {
        self.find_node(pattern)
            .map(|node| node.indexes.iter().map(|&i| i as usize).collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, pattern: &[u8]) -> bool {
        self.find_node(pattern).is_some_and(|node| !node.indexes.is_empty())
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn meta(&self) -> Option<&IndexMeta> {
        self.meta.as_ref()
    }

    pub fn set_meta(&mut self, meta: IndexMeta) {
        self.meta = Some(meta);
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let mut f = std::io::BufWriter::new(std::fs::File::create(path)?);
        bincode::serialize_into(&mut f, self)?;
        f.flush()?;
        info!("suffix tree saved: {} ({} nodes)", path, self.nodes.len());
        Ok(())
    }

    pub fn load_from_file(path: &str) -> Result<Self> {
        let f = std::io::BufReader::new(std::fs::File::open(path)?);
        let tree: Self = bincode::deserialize_from(f)?;
        info!("suffix tree loaded: {} (text length {})", path, tree.text.len());
        Ok(tree)
    }
}
