//! Symptoms domain actions

mod analyze;
mod prompt;

pub use analyze::*;
