/// A position-tracking view over the input text.
///
/// Positions are byte offsets into the source and always fall on a character
/// boundary. The cursor also counts how many parenthesized groups are currently
/// open so the parser can refuse input that would nest too deeply.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source:   &'a str,
    position: usize,
    depth:    usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source,
               position: 0,
               depth: 0 }
    }

    /// Current byte offset into the source.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The unconsumed remainder of the source.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the next character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Returns `true` once every character has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Moves the cursor forward by `bytes`.
    ///
    /// The caller must land on a character boundary; the lexer only ever
    /// advances by the length of an ASCII literal it has matched.
    pub fn advance(&mut self, bytes: usize) {
        self.position = (self.position + bytes).min(self.source.len());
    }

    /// Advances past any run of whitespace. Never fails.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Number of parenthesized groups currently open.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) const fn enter_group(&mut self) {
        self.depth += 1;
    }

    pub(crate) const fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Cursor;

    #[test]
    fn peek_does_not_consume() {
        let cursor = Cursor::new("12");
        assert_eq!(cursor.peek(), Some('1'));
        assert_eq!(cursor.peek(), Some('1'));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn bump_walks_to_the_end() {
        let mut cursor = Cursor::new("a(");
        assert_eq!(cursor.bump(), Some('a'));
        assert_eq!(cursor.bump(), Some('('));
        assert_eq!(cursor.bump(), None);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn skip_whitespace_stops_at_content() {
        let mut cursor = Cursor::new(" \t\n 7 ");
        cursor.skip_whitespace();
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.rest(), "7 ");
    }

    #[test]
    fn skip_whitespace_is_a_no_op_at_end() {
        let mut cursor = Cursor::new("");
        cursor.skip_whitespace();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn positions_are_byte_offsets() {
        let mut cursor = Cursor::new("é1");
        cursor.bump();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.peek(), Some('1'));
    }

    #[test]
    fn advance_is_clamped_to_the_source() {
        let mut cursor = Cursor::new("42");
        cursor.advance(10);
        assert!(cursor.is_at_end());
    }
}
