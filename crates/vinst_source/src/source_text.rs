//! The preprocessed module region with a line-start index.

/// Decoded module source after comment/block stripping and boundary isolation.
///
/// Immutable once built. Stores precomputed line-start offsets so the
/// extractor can map byte offsets to line numbers without rescanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    text: String,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<u32>,
}

impl SourceText {
    /// Wraps already-preprocessed text, computing its line starts.
    pub fn new(text: String) -> Self {
        let line_starts = compute_line_starts(&text);
        Self { text, line_starts }
    }

    /// Returns the text content.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Converts a byte offset into a 0-indexed line number.
    ///
    /// Offsets past the end resolve to the last line.
    pub fn line_of(&self, byte_offset: usize) -> usize {
        let offset = byte_offset as u32;
        match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        }
    }
}

/// Computes the byte offsets of each line start in the given content.
fn compute_line_starts(content: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push((i + 1) as u32);
        }
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_starts_computation() {
        let t = SourceText::new("abc\ndef\nghi".to_string());
        assert_eq!(t.line_starts, vec![0, 4, 8]);
    }

    #[test]
    fn line_resolution() {
        let t = SourceText::new("abc\ndef\nghi".to_string());
        assert_eq!(t.line_of(0), 0);
        assert_eq!(t.line_of(3), 0); // the newline itself
        assert_eq!(t.line_of(4), 1);
        assert_eq!(t.line_of(9), 2);
        assert_eq!(t.line_of(100), 2);
    }

    #[test]
    fn empty_text() {
        let t = SourceText::new(String::new());
        assert_eq!(t.line_starts, vec![0]);
        assert_eq!(t.line_of(0), 0);
    }
}
