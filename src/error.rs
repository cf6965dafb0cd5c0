/// 库内统一错误类型。
///
/// 所有算法都是纯函数，同样的输入总是以同样的方式失败，因此这里没有“可重试”类错误。
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// decode 收到长度为 0 的 BWT
    #[error("empty input: BWT string of length 0")]
    EmptyTransform,
    #[error("sentinel {:?} not found in BWT string", sym(.sentinel))]
    SentinelNotFound { sentinel: u8 },
    #[error("sentinel {:?} occurs {count} times in BWT string, expected exactly once", sym(.sentinel))]
    RepeatedSentinel { sentinel: u8, count: usize },
    /// 哨兵只能作为文本最后一个字符出现
    #[error("sentinel {:?} found inside text at position {position}", sym(.sentinel))]
    MisplacedSentinel { sentinel: u8, position: usize },
    /// LF 映射回溯未能覆盖全部行，输入不是合法的 BWT
    #[error("malformed BWT: last-to-first walk recovered {recovered} of {expected} symbols")]
    MalformedTransform { recovered: usize, expected: usize },
    #[error("separator occurs in pattern at position {position}")]
    SeparatorInPattern { position: usize },
    #[error("separator occurs in text at position {position}")]
    SeparatorInText { position: usize },
    #[error("symbol {:?} at sequence {sequence}, position {position} is not in the alphabet", sym(.symbol))]
    SymbolNotInAlphabet { symbol: u8, sequence: usize, position: usize },
    #[error("invalid motif parameters: {0}")]
    InvalidMotifParams(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn sym(b: &u8) -> char {
    *b as char
}
