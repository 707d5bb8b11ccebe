use std::iter::FusedIterator;

/// A cursor over the lines of a configuration file that can peek at the next line without consuming it.
///
/// The cursor is shared by every level of the block parser: a nested block advances it, and when the nested block
/// returns, its parent continues from wherever the child stopped. Line terminators (`\n`, optionally preceded by
/// `\r`) are stripped from the returned lines.
#[derive(Clone, Debug)]
pub struct LineCursor<'buf> {
    base: &'buf str,
    offset: usize,
    line: u32,
}

impl<'buf> LineCursor<'buf> {
    /// Create a new cursor positioned at the first line of `base`.
    pub fn new(base: &'buf str) -> Self {
        Self {
            base,
            offset: 0,
            line: 1,
        }
    }

    /// Returns the 1-based line number of the line that [`peek()`][LineCursor::peek] would return.
    #[inline(always)]
    pub fn line_number(&self) -> u32 {
        self.line
    }

    /// Returns true if there are no more lines to read.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.offset >= self.base.len()
    }

    /// Peek at the next line without its terminator.
    pub fn peek(&self) -> Option<&'buf str> {
        self.split_next().map(|(line, _)| line)
    }

    /// Skip past the next line.
    pub fn advance(&mut self) {
        if let Some((_, next)) = self.split_next() {
            self.offset = next;
            self.line += 1;
        }
    }

    /// Returns the next line (without its terminator) and the offset of the line after it.
    fn split_next(&self) -> Option<(&'buf str, usize)> {
        if self.is_empty() {
            return None;
        }

        let rest = &self.base[self.offset..];
        let (line, next) = match rest.find('\n') {
            Some(eol) => (&rest[..eol], self.offset + eol + 1),
            None => (rest, self.base.len()),
        };

        Some((line.strip_suffix('\r').unwrap_or(line), next))
    }
}

impl<'buf> Iterator for LineCursor<'buf> {
    type Item = &'buf str;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.peek()?;
        self.advance();
        Some(line)
    }
}

impl FusedIterator for LineCursor<'_> {}

#[cfg(test)]
mod tests {
    use super::LineCursor;

    #[test]
    fn peek_does_not_consume() {
        let mut cursor = LineCursor::new("one\ntwo\n");
        assert_eq!(cursor.peek(), Some("one"));
        assert_eq!(cursor.peek(), Some("one"));
        assert_eq!(cursor.line_number(), 1);

        cursor.advance();
        assert_eq!(cursor.peek(), Some("two"));
        assert_eq!(cursor.line_number(), 2);

        cursor.advance();
        assert!(cursor.is_empty());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn strips_crlf_and_keeps_blank_lines() {
        let lines: Vec<_> = LineCursor::new("a = 1\r\n\r\n\tb = 2").collect();
        assert_eq!(lines, vec!["a = 1", "", "\tb = 2"]);
    }

    #[test]
    fn trailing_newline_does_not_add_a_line() {
        assert_eq!(LineCursor::new("x\n").count(), 1);
        assert_eq!(LineCursor::new("").count(), 0);
    }
}
