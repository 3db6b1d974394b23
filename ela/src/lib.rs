mod alg;
mod types;

pub use alg::*;
pub use types::*;

pub mod util;
