//! Run orchestration: open the input, measure, buffer, route.

pub mod run;
