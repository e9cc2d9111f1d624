/// A cursor over the lines of one input buffer.
///
/// The whole buffer is split up front; a page body is small enough that a
/// streaming abstraction would buy nothing. `lines()` handles both `\n` and
/// `\r\n` endings, so downstream code never sees a carriage return.
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            pos: 0,
        }
    }

    /// The current line without advancing.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Consumes and returns the current line.
    pub fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.pos).copied()?;
        self.pos += 1;
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_walks_lines_in_order() {
        let mut cur = LineCursor::new("one\ntwo\nthree");
        assert_eq!(cur.peek(), Some("one"));
        assert_eq!(cur.next_line(), Some("one"));
        assert_eq!(cur.next_line(), Some("two"));
        assert_eq!(cur.peek(), Some("three"));
        assert_eq!(cur.next_line(), Some("three"));
        assert_eq!(cur.next_line(), None);
    }

    #[test]
    fn crlf_endings_are_stripped() {
        let mut cur = LineCursor::new("a\r\nb\r\n");
        assert_eq!(cur.next_line(), Some("a"));
        assert_eq!(cur.next_line(), Some("b"));
        assert_eq!(cur.next_line(), None);
    }

    #[test]
    fn empty_input_is_immediately_exhausted() {
        let mut cur = LineCursor::new("");
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.next_line(), None);
    }

    #[test]
    fn blank_lines_are_preserved_as_empty_strings() {
        let mut cur = LineCursor::new("a\n\nb");
        assert_eq!(cur.next_line(), Some("a"));
        assert_eq!(cur.next_line(), Some(""));
        assert_eq!(cur.next_line(), Some("b"));
    }
}
