mod health_context;
mod profile;

pub use health_context::*;
pub use profile::*;
