//! One pass of the dispatcher:
//! probe → buffer → print directly, or launch the pager → stream → wait.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::{Context, Result};

use crate::config::{InputSource, RunConfig};
use crate::core::geometry::Geometry;
use crate::core::lookahead::{LineCursor, Lookahead};
use crate::core::router::{direct_write, Route};
use crate::pager::command::PagerCommand;
use crate::pager::handoff::{self, HandOff};

/// What a run ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Direct { lines: usize },
    Paged(HandOff),
}

/// Run against the real terminal, writing unpaged output to `out`.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<Outcome> {
    let reader = open_input(&config.input)?;
    let geometry = Geometry::probe(config.reserved_lines);
    let outcome = dispatch(reader, geometry, &config.pager, out);
    match &config.input {
        InputSource::File(path) => {
            outcome.with_context(|| format!("while paging {}", path.display()))
        }
        InputSource::Stdin => outcome,
    }
}

/// Open the input.  The file handle closes when the reader is dropped.
pub fn open_input(source: &InputSource) -> Result<Box<dyn BufRead>> {
    match source {
        InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
        InputSource::File(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Route `reader` for a known screen geometry.
pub fn dispatch<R, W>(
    reader: R,
    geometry: Geometry,
    pager: &PagerCommand,
    out: &mut W,
) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
{
    let lookahead = Lookahead::fill(LineCursor::new(reader), geometry.lookahead_limit())
        .context("failed to read input")?;

    match Route::decide(lookahead, geometry.usable_height) {
        Route::Direct(lines) => {
            tracing::debug!("route: direct ({} lines)", lines.len());
            direct_write(out, &lines).context("failed to write output")?;
            Ok(Outcome::Direct { lines: lines.len() })
        }
        Route::Page(lookahead) => {
            tracing::debug!("route: pager `{pager}` (>{} lines)", geometry.usable_height);
            let result = handoff::page(pager, lookahead.into_lines())?;
            tracing::debug!("hand-off: {result:?}");
            Ok(Outcome::Paged(result))
        }
    }
}
