pub mod draft;
pub mod roadmap;

pub use draft::*;
pub use roadmap::*;
