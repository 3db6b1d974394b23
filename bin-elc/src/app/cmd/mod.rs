pub mod echelon;
pub mod rref;
pub mod solve;
pub mod lsq;
pub mod backsub;
pub mod rank;
pub mod span;
pub mod subspace;
pub mod indep;
