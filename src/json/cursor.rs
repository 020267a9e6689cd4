//! Character cursor over the input.
//!
//! The cursor only moves forward. Productions that fail may leave it partway
//! through a token; nothing ever rewinds it.

/// Forward-only read position over a string, with a diagnostic column.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    current: Option<char>,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned on the first character.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            current: input.chars().next(),
            column: 1,
        }
    }

    /// Character at offset 0, or `None` for empty input.
    pub fn first(&self) -> Option<char> {
        self.input.chars().next()
    }

    /// Last character read, or `None` at end of input.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Move to the next character and return it.
    ///
    /// The column advances on every call, including calls at end of input.
    pub fn advance(&mut self) -> Option<char> {
        if let Some(c) = self.current {
            self.pos += c.len_utf8();
        }
        self.current = self.input.get(self.pos..).and_then(|rest| rest.chars().next());
        self.column = self.column.saturating_add(1);
        self.current
    }

    /// 1-based column of the current character.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset of the current character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether the cursor has run off the end of the input.
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Skip whitespace characters.
    pub fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let mut cursor = Cursor::new("");
        assert_eq!(cursor.first(), None);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_advance_counts_columns() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.first(), Some('a'));
        assert_eq!(cursor.current(), Some('a'));
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.column(), 2);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.column(), 3);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.column(), 4);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut cursor = Cursor::new("é北x");
        assert_eq!(cursor.advance(), Some('北'));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.advance(), Some('x'));
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn test_skip_whitespace() {
        let mut cursor = Cursor::new(" \t\r\n\u{3000}x ");
        cursor.skip_whitespace();
        assert_eq!(cursor.current(), Some('x'));
        assert_eq!(cursor.column(), 6);
        cursor.advance();
        cursor.skip_whitespace();
        assert!(cursor.is_at_end());
    }
}
