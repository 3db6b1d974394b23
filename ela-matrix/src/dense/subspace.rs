use log::debug;
use ela::{Field, FieldOps};
use crate::dense::*;
use crate::{MatTrait, SolveError};

pub fn rank<R>(a: &Mat<R>) -> usize
where R: Field, for<'a> &'a R: FieldOps<R> {
    reduce_to_ref(a.clone()).rank()
}

pub fn nullity<R>(a: &Mat<R>) -> usize
where R: Field, for<'a> &'a R: FieldOps<R> {
    a.ncols() - rank(a)
}

/// The columns of `a` at its pivot positions.
pub fn col_basis<R>(a: &Mat<R>) -> Vec<Vec<R>>
where R: Field, for<'a> &'a R: FieldOps<R> {
    let res = reduce_to_ref(a.clone());
    res.pivots().iter().map(|&j| a.col(j)).collect()
}

/// The nonzero rows of the RREF of `a`.
pub fn row_basis<R>(a: &Mat<R>) -> Vec<Vec<R>>
where R: Field, for<'a> &'a R: FieldOps<R> {
    let res = rref(a.clone());
    (0..res.rank()).map(|i| res.result().row(i)).collect()
}

/// A basis of `{ x | a x = 0 }`, one vector for each free column.
pub fn null_basis<R>(a: &Mat<R>) -> Vec<Vec<R>>
where R: Field, for<'a> &'a R: FieldOps<R> {
    let zeros = vec![R::zero(); a.nrows()];
    let e = reduce_to_ref(a.augment(&zeros)).destruct().0;

    // a homogeneous system with the right shape is always solvable.
    let Ok(sol) = back_substitute(&e, a.ncols()) else {
        return vec![]
    };

    let k = sol.n_params();
    (0..k).filter_map(|l| {
        let unit: Vec<_> = (0..k).map(|i|
            if i == l { R::one() } else { R::zero() }
        ).collect();
        sol.eval(&unit)
    }).collect()
}

/// Whether the columns of `a` are linearly independent.
pub fn is_independent<R>(a: &Mat<R>) -> bool
where R: Field, for<'a> &'a R: FieldOps<R> {
    rank(a) == a.ncols()
}

/// Nontrivial coefficients `c` with `a c = 0`, if the columns of `a`
/// are dependent.
pub fn dependency<R>(a: &Mat<R>) -> Option<Vec<R>>
where R: Field, for<'a> &'a R: FieldOps<R> {
    null_basis(a).into_iter().next()
}

/// Whether `s` lies in the span of the columns of `d`.
pub fn span_contains<R>(d: &Mat<R>, s: &[R]) -> Result<bool, SolveError>
where R: Field, for<'a> &'a R: FieldOps<R> {
    if s.len() != d.nrows() {
        return Err(SolveError::DimMismatch { expected: d.nrows(), actual: s.len() })
    }

    let r0 = rank(d);
    let r1 = rank(&d.augment(s));

    debug!("rank(D) = {r0}, rank([D|s]) = {r1}.");

    Ok(r0 == r1)
}

/// All coefficient vectors `c` with `d c = s`.
pub fn span_coeffs<R>(d: &Mat<R>, s: &[R]) -> Result<Solution<R>, SolveError>
where R: Field, for<'a> &'a R: FieldOps<R> {
    solve(d, s)
}

/// The four pieces of information attached to the column, row and
/// null spaces of a matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Subspaces<R>
where R: Field, for<'a> &'a R: FieldOps<R> {
    pub rank: usize,
    pub nullity: usize,
    pub pivots: Vec<usize>,
    pub col_basis: Vec<Vec<R>>,
    pub row_basis: Vec<Vec<R>>,
    pub null_basis: Vec<Vec<R>>
}

impl<R> Subspaces<R>
where R: Field, for<'a> &'a R: FieldOps<R> {
    pub fn of(a: &Mat<R>) -> Self {
        let res = rref(a.clone());
        let rank = res.rank();
        let pivots = res.pivots().to_vec();

        let col_basis = pivots.iter().map(|&j| a.col(j)).collect();
        let row_basis = (0..rank).map(|i| res.result().row(i)).collect();
        let null_basis = null_basis(a);

        Self {
            rank,
            nullity: a.ncols() - rank,
            pivots,
            col_basis,
            row_basis,
            null_basis
        }
    }
}
