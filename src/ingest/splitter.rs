/// Splits a chunked byte stream into complete `\n`-terminated lines.
///
/// Bytes after the last newline are carried over to the next chunk. Lines are
/// decoded as UTF-8 only once complete, so multi-byte characters straddling a
/// chunk boundary survive. A trailing `\r` is stripped from each line.
#[derive(Debug, Clone, Default)]
pub struct LineSplitter {
    carry: Vec<u8>,
}

impl LineSplitter {
    /// Create a splitter with an empty carry-over buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk and return the lines it completes, in order.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        let mut rest = chunk;

        while let Some(pos) = rest.iter().position(|&b| b == b'\n') {
            let (head, tail) = rest.split_at(pos);
            let line = if self.carry.is_empty() {
                decode(head)
            } else {
                self.carry.extend_from_slice(head);
                let line = decode(&self.carry);
                self.carry.clear();
                line
            };
            lines.push(line);
            rest = &tail[1..];
        }

        self.carry.extend_from_slice(rest);
        lines
    }

    /// Bytes of the pending incomplete line.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.carry.len()
    }

    /// End of stream: discard the incomplete trailing line and return its length in bytes.
    pub fn finish(&mut self) -> usize {
        let dropped = self.carry.len();
        self.carry.clear();
        dropped
    }
}

fn decode(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_chunk() {
        let mut splitter = LineSplitter::new();
        assert_eq!(splitter.push(b"a,b\n1,2\n"), vec!["a,b", "1,2"]);
        assert_eq!(splitter.pending(), 0);
    }

    #[test]
    fn test_line_split_across_chunks() {
        let mut splitter = LineSplitter::new();
        assert_eq!(splitter.push(b"a,"), Vec::<String>::new());
        assert_eq!(splitter.push(b"b\n1"), vec!["a,b"]);
        assert_eq!(splitter.push(b",2\n"), vec!["1,2"]);
    }

    #[test]
    fn test_trailing_partial_line_is_dropped() {
        let mut splitter = LineSplitter::new();
        assert_eq!(splitter.push(b"a\nb"), vec!["a"]);
        assert_eq!(splitter.pending(), 1);
        assert_eq!(splitter.finish(), 1);
        assert_eq!(splitter.pending(), 0);
    }

    #[test]
    fn test_empty_lines_are_emitted() {
        let mut splitter = LineSplitter::new();
        assert_eq!(splitter.push(b"\n\na\n"), vec!["", "", "a"]);
    }

    #[test]
    fn test_crlf_is_stripped() {
        let mut splitter = LineSplitter::new();
        assert_eq!(splitter.push(b"a,b\r"), Vec::<String>::new());
        assert_eq!(splitter.push(b"\n1,2\r\n"), vec!["a,b", "1,2"]);
    }

    #[test]
    fn test_multibyte_char_split_across_chunks() {
        let text = "name\nα Centauri\n".as_bytes();
        // Split inside the two-byte 'α'
        let cut = text.iter().position(|&b| b == 0xCE).unwrap() + 1;

        let mut splitter = LineSplitter::new();
        let mut lines = splitter.push(&text[..cut]);
        lines.extend(splitter.push(&text[cut..]));

        assert_eq!(lines, vec!["name", "α Centauri"]);
    }
}
