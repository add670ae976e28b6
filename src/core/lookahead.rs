//! Lookahead buffer: pull a bounded prefix of the input, keep the rest lazy.
//!
//! Lines are raw bytes split on `\n`, newline included.  Nothing is decoded,
//! so colour escapes and invalid UTF-8 pass through untouched.

use std::io::{self, BufRead};

/// A single input line, trailing `\n` included when present.
pub type Line = Vec<u8>;

/// One-shot forward cursor over the lines of a reader.
pub struct LineCursor<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, done: false }
    }
}

impl<R: BufRead> Iterator for LineCursor<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => Some(Ok(line)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// The buffered prefix plus the cursor positioned right after it.
pub struct Lookahead<R> {
    buffered: Vec<Line>,
    rest: LineCursor<R>,
}

impl<R: BufRead> Lookahead<R> {
    /// Read up to `limit` lines.  Stops early at end of input.
    pub fn fill(mut rest: LineCursor<R>, limit: usize) -> io::Result<Self> {
        let mut buffered = Vec::new();
        while buffered.len() < limit {
            match rest.next() {
                Some(line) => buffered.push(line?),
                None => break,
            }
        }
        Ok(Self { buffered, rest })
    }

    pub fn buffered(&self) -> &[Line] {
        &self.buffered
    }

    /// Drop the cursor and keep only what was read.  Callers use this once
    /// they know the input ended inside the lookahead window.
    pub fn into_buffered(self) -> Vec<Line> {
        self.buffered
    }

    /// Every line of the input in order: buffered prefix, then the remainder.
    pub fn into_lines(self) -> impl Iterator<Item = io::Result<Line>> {
        self.buffered.into_iter().map(Ok).chain(self.rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookahead(input: &[u8], limit: usize) -> Lookahead<&[u8]> {
        Lookahead::fill(LineCursor::new(input), limit).unwrap()
    }

    fn collect(it: impl Iterator<Item = io::Result<Line>>) -> Vec<u8> {
        it.map(Result::unwrap).flatten().collect()
    }

    #[test]
    fn cursor_keeps_newlines_and_unterminated_tail() {
        let lines: Vec<Line> = LineCursor::new(&b"a\nbb\nccc"[..]).map(Result::unwrap).collect();
        assert_eq!(lines, vec![b"a\n".to_vec(), b"bb\n".to_vec(), b"ccc".to_vec()]);
    }

    #[test]
    fn empty_input_gives_empty_buffer_and_remainder() {
        let la = lookahead(b"", 5);
        assert!(la.buffered().is_empty());
        assert_eq!(la.into_lines().count(), 0);
    }

    #[test]
    fn stops_at_limit() {
        let la = lookahead(b"1\n2\n3\n4\n", 2);
        assert_eq!(la.buffered(), &[b"1\n".to_vec(), b"2\n".to_vec()]);
    }

    #[test]
    fn stops_at_end_of_input() {
        let la = lookahead(b"1\n2\n", 10);
        assert_eq!(la.buffered().len(), 2);
    }

    #[test]
    fn split_is_exact_for_every_limit() {
        let input = b"one\ntwo\n\nfour\n\x1b[31mred\x1b[0m\nlast";
        for limit in 0..10 {
            assert_eq!(collect(lookahead(input, limit).into_lines()), input.to_vec(), "limit {limit}");
        }
    }

    #[test]
    fn passes_through_invalid_utf8() {
        let input = b"\xff\xfe\n\x80";
        assert_eq!(collect(lookahead(input, 1).into_lines()), input.to_vec());
    }
}
