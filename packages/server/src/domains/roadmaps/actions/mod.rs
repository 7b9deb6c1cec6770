//! Roadmaps domain actions

mod generate;

pub use generate::*;
