mod mat;
mod reduce;
mod rref;
mod solve;
mod subspace;

pub use mat::*;
pub use reduce::*;
pub use rref::*;
pub use solve::*;
pub use subspace::*;
