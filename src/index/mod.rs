//! 文本变换与后缀索引：BWT 编解码、后缀数组、后缀树及其缓存。

pub mod bwt;
pub mod cache;
pub mod sa;
pub mod suffix_tree;
