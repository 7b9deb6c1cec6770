//! Diet plans domain actions

mod generate;

pub use generate::*;
