pub mod diet_plan;
pub mod draft;

pub use diet_plan::*;
pub use draft::*;
