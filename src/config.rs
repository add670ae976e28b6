//! Run configuration: everything the environment and command line decide,
//! resolved once before any input is read.

use std::path::PathBuf;

use crate::pager::command::PagerCommand;

/// Environment variable naming the user's pager.
pub const PAGER_ENV: &str = "PAGER";

/// Where input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` and `-` both mean standard input.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: InputSource,
    /// Rows kept free for the shell prompt.
    pub reserved_lines: usize,
    pub pager: PagerCommand,
}

impl RunConfig {
    /// Build from parsed arguments plus `$PAGER`.
    pub fn from_cli(
        file: Option<PathBuf>,
        reserved_lines: usize,
        pager_override: Option<&str>,
    ) -> Self {
        let env_pager = std::env::var(PAGER_ENV).ok();
        Self::resolve(file, reserved_lines, pager_override, env_pager.as_deref())
    }

    /// Same as [`RunConfig::from_cli`] with the environment passed in.
    pub fn resolve(
        file: Option<PathBuf>,
        reserved_lines: usize,
        pager_override: Option<&str>,
        env_pager: Option<&str>,
    ) -> Self {
        let config = Self {
            input: InputSource::from_arg(file),
            reserved_lines,
            pager: PagerCommand::resolve(pager_override, env_pager),
        };
        tracing::debug!("config: {config:?}");
        config
    }
}
