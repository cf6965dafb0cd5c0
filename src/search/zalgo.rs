use crate::error::{Error, Result};

use super::prefix::z_array;

/// 默认分隔符
pub const DEFAULT_SEPARATOR: u8 = b'$';

/// 基于 Z 数组的匹配，O(n+m)。
///
/// 构造 `pattern + separator + text`，其 Z 数组在 text 段内取值恰为 `pattern.len()`
/// 的位置即为一次匹配。分隔符必须同时不出现在 pattern 与 text 中，否则返回
/// [`Error::SeparatorInPattern`] / [`Error::SeparatorInText`]。
pub fn z_search<T: PartialEq>(pattern: &[T], text: &[T], separator: &T) -> Result<Vec<usize>> {
    if let Some(position) = pattern.iter().position(|s| s == separator) {
        return Err(Error::SeparatorInPattern { position });
    }
    if let Some(position) = text.iter().position(|s| s == separator) {
        return Err(Error::SeparatorInText { position });
    }

    let m = pattern.len();
    let n = text.len();
    if m == 0 {
        return Ok((0..n).collect());
    }
    if m > n {
        return Ok(Vec::new());
    }

    // 只拼接引用，避免对符号类型要求 Clone
    let concat: Vec<&T> = pattern
        .iter()
        .chain(std::iter::once(separator))
        .chain(text.iter())
        .collect();
    let z = z_array(&concat);

    Ok(z[m + 1..]
        .iter()
        .enumerate()
        .filter(|(_, &v)| v == m)
        .map(|(i, _)| i)
        .collect())
}
