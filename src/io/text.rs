use std::io::BufRead;

use crate::error::Result;

/// 逐行读取纯文本序列，丢弃全部空白字符后拼接（不解析 FASTA 头）。
pub struct SequenceReader<R: BufRead> {
    reader: R,
    buf: String,
}

impl<R: BufRead> SequenceReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: String::new() }
    }

    pub fn read_all(mut self) -> Result<Vec<u8>> {
        let mut seq = Vec::new();
        loop {
            self.buf.clear();
            let n = self.reader.read_line(&mut self.buf)?;
            if n == 0 {
                break;
            }
            seq.extend(self.buf.bytes().filter(|b| !b.is_ascii_whitespace()));
        }
        Ok(seq)
    }
}

pub fn read_sequence_file(path: &str) -> Result<Vec<u8>> {
    let fh = std::fs::File::open(path)?;
    SequenceReader::new(std::io::BufReader::new(fh)).read_all()
}

/// 命令行序列参数：`@path` 从文件读取，否则按字面字节使用。
pub fn resolve_sequence(arg: &str) -> Result<Vec<u8>> {
    match arg.strip_prefix('@') {
        Some(path) => read_sequence_file(path),
        None => Ok(arg.as_bytes().to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn strips_whitespace_and_crlf() {
        let data = b"ACGT acgt\r\n\tNNN\n\nTT";
        let seq = SequenceReader::new(Cursor::new(&data[..])).read_all().unwrap();
        assert_eq!(seq, b"ACGTacgtNNNTT");
    }

    #[test]
    fn empty_input() {
        let seq = SequenceReader::new(Cursor::new(&b""[..])).read_all().unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn literal_argument() {
        assert_eq!(resolve_sequence("banana").unwrap(), b"banana");
    }

    #[test]
    fn file_argument() {
        let path = std::env::temp_dir().join(format!("bioinfotools-seq-{}.txt", std::process::id()));
        std::fs::write(&path, "GATT\nACA\n").unwrap();
        let arg = format!("@{}", path.display());
        let seq = resolve_sequence(&arg).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(seq, b"GATTACA");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = resolve_sequence("@/nonexistent/bioinfotools/seq.txt").unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
