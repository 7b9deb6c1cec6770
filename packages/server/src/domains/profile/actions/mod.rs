//! Profile domain actions

mod profile;

pub use profile::*;
