//! Terminal geometry probe.
//!
//! Answers one question: how many rows can unpaged output occupy before it
//! scrolls off the top of the screen?

use std::io::{self, IsTerminal};

/// Height used when stdout is not a terminal or its size can't be queried.
pub const FALLBACK_HEIGHT: usize = 24;

/// Rows left free for the shell prompt by default.
pub const DEFAULT_RESERVED_LINES: usize = 3;

/// Visible terminal rows, and how many of them unpaged output may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub terminal_height: usize,
    pub usable_height: usize,
}

impl Geometry {
    /// Query the controlling terminal.
    ///
    /// `$LINES` wins when set to a positive number, then the real terminal
    /// size (only if stdout is a tty), then [`FALLBACK_HEIGHT`].
    pub fn probe(reserved_lines: usize) -> Self {
        let lines_env = std::env::var("LINES").ok();
        let queried = if io::stdout().is_terminal() {
            crossterm::terminal::size().ok().map(|(_, rows)| rows)
        } else {
            None
        };
        let geometry = Self::from_sources(lines_env.as_deref(), queried, reserved_lines);
        tracing::debug!(
            "geometry: terminal={} usable={} (LINES={:?}, queried={:?})",
            geometry.terminal_height,
            geometry.usable_height,
            lines_env,
            queried
        );
        geometry
    }

    /// Pure resolution used by [`Geometry::probe`].
    pub fn from_sources(
        lines_env: Option<&str>,
        queried_rows: Option<u16>,
        reserved_lines: usize,
    ) -> Self {
        let from_env = lines_env
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0);
        let from_tty = queried_rows.map(usize::from).filter(|&n| n > 0);
        let terminal_height = from_env.or(from_tty).unwrap_or(FALLBACK_HEIGHT);
        Self::new(terminal_height, reserved_lines)
    }

    pub fn new(terminal_height: usize, reserved_lines: usize) -> Self {
        Self {
            terminal_height,
            usable_height: terminal_height.saturating_sub(reserved_lines),
        }
    }

    /// How many lines the lookahead pulls: one past the screen, so "fits
    /// exactly" and "overflows" can be told apart.
    pub fn lookahead_limit(&self) -> usize {
        self.terminal_height.saturating_add(1)
    }
}
