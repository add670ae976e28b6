//! External pager hand-off.
//!
//! Resolving which program to run lives in [`command`]; spawning it and
//! streaming input into its stdin lives in [`handoff`].

pub mod command;
pub mod handoff;
