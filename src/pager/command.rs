//! Pager command resolution.

use std::fmt;
use std::path::Path;

/// Pager used when nothing else is configured.
pub const DEFAULT_PAGER: &str = "less";

/// Flags only `less` understands:
/// `-R` interprets colour escapes, `-+F` stays open even when the content
/// fits on one screen, `-+X` clears the screen on entry and exit.
const DEFAULT_PAGER_FLAGS: &[&str] = &["-R", "-+F", "-+X"];

/// Program and arguments used to launch the pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl PagerCommand {
    /// Pick the pager: `override_` first, then `env_value` (normally
    /// `$PAGER`), then [`DEFAULT_PAGER`].  Blank values count as unset.
    ///
    /// The chosen string is the program name as-is, spaces and all; it is
    /// never split into arguments.  `less` gets its display flags appended.
    pub fn resolve(override_: Option<&str>, env_value: Option<&str>) -> Self {
        let program = [override_, env_value]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_PAGER);

        let mut command = Self {
            program: program.to_owned(),
            args: Vec::new(),
        };
        if command.is_default_pager() {
            command
                .args
                .extend(DEFAULT_PAGER_FLAGS.iter().map(|f| (*f).to_owned()));
        }
        command
    }

    /// Does the program's base name match [`DEFAULT_PAGER`]?
    pub fn is_default_pager(&self) -> bool {
        Path::new(&self.program)
            .file_name()
            .is_some_and(|name| name == DEFAULT_PAGER)
    }
}

impl fmt::Display for PagerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
