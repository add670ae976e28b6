//! Output router: decide between printing directly and paging.

use std::io::{self, BufRead, Write};

use super::lookahead::{Line, Lookahead};

/// Where the input goes.
pub enum Route<R> {
    /// Everything fit; these are all the lines there are.
    Direct(Vec<Line>),
    /// Too tall for the screen; hand the whole stream to the pager.
    Page(Lookahead<R>),
}

impl<R: BufRead> Route<R> {
    /// Page when more lines were buffered than the screen can show.
    ///
    /// `lookahead` must have been filled with a limit above `usable_height`
    /// so a short buffer means the input really ended.
    pub fn decide(lookahead: Lookahead<R>, usable_height: usize) -> Self {
        if lookahead.buffered().len() > usable_height {
            Route::Page(lookahead)
        } else {
            Route::Direct(lookahead.into_buffered())
        }
    }
}

/// Write `lines` verbatim.
///
/// Nothing is written for logically empty input: no lines, an empty last
/// line, or a single line that is blank once whitespace is stripped.  A final `\n`
/// is added if the last line lacks one; that only patches up unterminated
/// input.
pub fn direct_write<W: Write>(out: &mut W, lines: &[Line]) -> io::Result<()> {
    let Some(last) = lines.last() else {
        return Ok(());
    };
    if last.is_empty() || (lines.len() == 1 && is_blank(last)) {
        return Ok(());
    }
    for line in lines {
        out.write_all(line)?;
    }
    if !last.ends_with(b"\n") {
        out.write_all(b"\n")?;
    }
    out.flush()
}

fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lookahead::LineCursor;

    fn written(lines: &[&[u8]]) -> Vec<u8> {
        let lines: Vec<Line> = lines.iter().map(|l| l.to_vec()).collect();
        let mut out = Vec::new();
        direct_write(&mut out, &lines).unwrap();
        out
    }

    fn route(input: &[u8], terminal_height: usize, reserved: usize) -> Route<&[u8]> {
        let geometry = crate::core::geometry::Geometry::new(terminal_height, reserved);
        let la = Lookahead::fill(LineCursor::new(input), geometry.lookahead_limit()).unwrap();
        Route::decide(la, geometry.usable_height)
    }

    fn numbered(n: usize) -> Vec<u8> {
        (1..=n).flat_map(|i| format!("line {i}\n").into_bytes()).collect()
    }

    #[test]
    fn no_lines_writes_nothing() {
        assert!(written(&[]).is_empty());
    }

    #[test]
    fn lone_empty_line_writes_nothing() {
        assert!(written(&[b""]).is_empty());
    }

    #[test]
    fn lone_newline_writes_nothing() {
        assert!(written(&[b"\n"]).is_empty());
        assert!(written(&[b"\r\n"]).is_empty());
    }

    #[test]
    fn lone_whitespace_line_writes_nothing() {
        assert!(written(&[b"  \n"]).is_empty());
        assert!(written(&[b"\t \r\n"]).is_empty());
        assert_eq!(written(&[b" x \n"]), b" x \n");
    }

    #[test]
    fn trailing_blank_line_after_content_is_kept() {
        assert_eq!(written(&[b"abc\n", b"\n"]), b"abc\n\n");
        assert_eq!(written(&[b"abc\n", b"  \n"]), b"abc\n  \n");
    }

    #[test]
    fn appends_missing_newline() {
        assert_eq!(written(&[b"abc"]), b"abc\n");
    }

    #[test]
    fn well_formed_input_is_unchanged() {
        assert_eq!(written(&[b"abc\n", b"def\n"]), b"abc\ndef\n");
    }

    #[test]
    fn blank_lines_in_the_middle_survive() {
        assert_eq!(written(&[b"a\n", b"\n", b"b"]), b"a\n\nb\n");
    }

    #[test]
    fn exactly_usable_height_prints_directly() {
        match route(&numbered(7), 10, 3) {
            Route::Direct(lines) => assert_eq!(lines.len(), 7),
            Route::Page(_) => panic!("7 lines should fit in 7 usable rows"),
        }
    }

    #[test]
    fn one_past_usable_height_pages_everything() {
        let input = numbered(8);
        match route(&input, 10, 3) {
            Route::Page(la) => {
                let all: Vec<u8> = la.into_lines().map(Result::unwrap).flatten().collect();
                assert_eq!(all, input);
            }
            Route::Direct(_) => panic!("8 lines should overflow 7 usable rows"),
        }
    }

    #[test]
    fn long_input_is_forwarded_whole() {
        let input = numbered(500);
        match route(&input, 10, 3) {
            Route::Page(la) => {
                assert_eq!(la.buffered().len(), 11);
                assert_eq!(la.into_lines().count(), 500);
            }
            Route::Direct(_) => panic!("500 lines should be paged"),
        }
    }

    #[test]
    fn empty_input_prints_directly() {
        assert!(matches!(route(b"", 10, 3), Route::Direct(ref l) if l.is_empty()));
    }

    #[test]
    fn zero_usable_height_pages_any_content() {
        assert!(matches!(route(b"x\n", 2, 3), Route::Page(_)));
        assert!(matches!(route(b"", 2, 3), Route::Direct(_)));
    }
}
