//! Byte cursor shared by the declaration scanners.

/// A forward-only cursor over the module region.
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str, pos: usize) -> Self {
        Self { src, pos }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub(crate) fn peek(&self) -> u8 {
        self.src.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while self.peek().is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Returns the identifier starting at the cursor without consuming it.
    pub(crate) fn peek_identifier(&self) -> Option<&'a str> {
        identifier_at(self.src, self.pos)
    }

    /// Consumes the identifier at the cursor if it is one of `words`.
    pub(crate) fn eat_any_keyword(&mut self, words: &[&str]) -> bool {
        match self.peek_identifier() {
            Some(ident) if words.contains(&ident) => {
                self.pos += ident.len();
                true
            }
            _ => false,
        }
    }

    /// Consumes one token the scanner treats as atomic: a string literal, a
    /// balanced bracket group, an identifier, or a single byte.
    pub(crate) fn skip_atom(&mut self) {
        match self.peek() {
            b'"' => self.skip_string(),
            b'(' | b'[' | b'{' => self.skip_group(),
            b if is_ident_start(b) => {
                while is_ident_char(self.peek()) {
                    self.pos += 1;
                }
            }
            _ => self.pos += 1,
        }
    }

    /// Consumes a bracket group starting at the cursor, including nested
    /// groups of any bracket kind. Stops at end of input if unbalanced.
    pub(crate) fn skip_group(&mut self) {
        let mut depth = 0usize;
        while !self.at_end() {
            match self.peek() {
                b'"' => {
                    self.skip_string();
                    continue;
                }
                b'(' | b'[' | b'{' => depth += 1,
                b')' | b']' | b'}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.pos += 1;
                        return;
                    }
                }
                _ => {}
            }
            self.pos += 1;
        }
    }

    fn skip_string(&mut self) {
        self.pos += 1;
        while !self.at_end() {
            match self.peek() {
                b'\\' => self.pos += 2,
                b'"' => {
                    self.pos += 1;
                    return;
                }
                _ => self.pos += 1,
            }
        }
        self.pos = self.pos.min(self.src.len());
    }
}

/// Finds the next standalone keyword from `words` at or after `from`.
///
/// String literals are skipped, so a keyword quoted in a `$display` call
/// is never reported. Returns the keyword's offset and text.
pub(crate) fn find_keyword<'a>(
    src: &'a str,
    from: usize,
    words: &[&str],
) -> Option<(usize, &'a str)> {
    let mut cursor = Cursor::new(src, from);
    while !cursor.at_end() {
        if cursor.peek() == b'"' {
            cursor.skip_string();
            continue;
        }
        match cursor.peek_identifier() {
            Some(ident) if words.contains(&ident) => return Some((cursor.pos(), ident)),
            Some(ident) => cursor.pos += ident.len(),
            None => cursor.advance(),
        }
    }
    None
}

/// Returns the identifier starting exactly at `pos`, if any.
///
/// An identifier preceded by an identifier character is a suffix of a
/// longer word and is not reported.
pub(crate) fn identifier_at(src: &str, pos: usize) -> Option<&str> {
    let bytes = src.as_bytes();
    if !bytes.get(pos).copied().is_some_and(is_ident_start) {
        return None;
    }
    if pos > 0 && is_ident_char(bytes[pos - 1]) {
        return None;
    }
    let len = bytes[pos..]
        .iter()
        .position(|&b| !is_ident_char(b))
        .unwrap_or(bytes.len() - pos);
    Some(&src[pos..pos + len])
}

/// Returns every identifier in `text` with its byte offset.
pub(crate) fn identifiers(text: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut cursor = Cursor::new(text, 0);
    while !cursor.at_end() {
        if let Some(ident) = cursor.peek_identifier() {
            out.push((cursor.pos(), ident));
        }
        cursor.skip_atom();
    }
    out
}

pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

pub(crate) fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}
