//! Core logic: terminal geometry, input lookahead, and routing.
//!
//! Nothing in this module spawns processes; the pager side lives in
//! `crate::pager`.

pub mod geometry;
pub mod lookahead;
pub mod router;
