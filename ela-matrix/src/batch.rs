use log::info;
use ela::{Field, FieldOps};
use crate::dense::{Mat, Solution, solve};
use crate::SolveError;

cfg_if::cfg_if! {
    if #[cfg(feature = "multithread")] {
        use rayon::prelude::*;
        use crate::config::is_multithread_enabled;
    }
}

/// Solves each system `A x = b` independently. The results are in
/// the order of `systems`.
pub fn solve_all<R>(systems: &[(Mat<R>, Vec<R>)]) -> Vec<Result<Solution<R>, SolveError>>
where R: Field, for<'a> &'a R: FieldOps<R> {
    info!("solve {} systems.", systems.len());

    cfg_if::cfg_if! {
        if #[cfg(feature = "multithread")] {
            if is_multithread_enabled() {
                return systems.par_iter().map(|(a, b)| solve(a, b)).collect()
            }
        }
    }

    systems.iter().map(|(a, b)| solve(a, b)).collect()
}
