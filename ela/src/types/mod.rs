mod int;
mod ratio;
mod affine;

pub use int::*;
pub use ratio::*;
pub use affine::*;
