pub mod analysis;
pub mod assessment;

pub use analysis::*;
pub use assessment::*;
