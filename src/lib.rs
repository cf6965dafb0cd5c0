//! # bioinfotools
//!
//! 面向生物序列分析的精确字符串匹配与文本变换算法库。
//!
//! 本 crate 提供：
//!
//! - **前缀数组**：Z 数组与 KMP 失配函数（LPS），线性时间
//! - **精确匹配**：朴素扫描、Z 算法、KMP 三种可互换策略，结果完全一致
//! - **BWT 编解码**：旋转排序 / 后缀数组两种编码，基于 LF 映射的无损解码
//! - **后缀树**：逐后缀插入的 trie，支持子串定位与持久化，配套调用方持有的缓存
//! - **组成统计**：碱基计数、GC 偏斜及其最小值位置
//! - **模体搜索**：基于 profile 的贪心模体搜索
//!
//! ## 快速示例
//!
//! ```rust
//! use bioinfotools::index::bwt;
//! use bioinfotools::search::{self, SearchOpt, SearchStrategy};
//!
//! // 精确匹配（支持重叠匹配）
//! let opt = SearchOpt { strategy: SearchStrategy::Kmp, ..SearchOpt::default() };
//! let hits = search::find_all(b"aa", b"aaaa", opt).unwrap();
//! assert_eq!(hits, vec![0, 1, 2]);
//!
//! // BWT 往返
//! let encoded = bwt::encode(b"banana", bwt::DEFAULT_SENTINEL).unwrap();
//! assert_eq!(encoded, b"annb$aa");
//! let decoded = bwt::decode(&encoded, bwt::DEFAULT_SENTINEL).unwrap();
//! assert_eq!(decoded, b"banana$");
//! ```
//!
//! ## 模块说明
//!
//! - [`search`] — Z / LPS 前缀数组与三种精确匹配策略
//! - [`index`] — BWT、后缀数组、后缀树及缓存
//! - [`stats`] — 碱基计数与 GC 偏斜
//! - [`motif`] — 贪心模体搜索
//! - [`io`] — 纯文本序列读取
//! - [`util`] — DNA 字母表等工具
//! - [`error`] — 错误类型

pub mod error;
pub mod index;
pub mod io;
pub mod motif;
pub mod search;
pub mod stats;
pub mod util;

pub use error::{Error, Result};
