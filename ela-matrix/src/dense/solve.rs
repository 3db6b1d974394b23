use std::collections::BTreeSet;
use std::fmt::Display;
use log::{debug, trace, warn};
use num_traits::Zero;
use ela::{Field, FieldOps, Affine, Param};
use crate::dense::*;
use crate::{MatTrait, SolveError};

/// The outcome of solving `A x = b`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum Solution<R>
where R: Field, for<'a> &'a R: FieldOps<R> {
    /// Some row reads `0 = b` with `b ≠ 0`.
    Inconsistent,

    /// `solution[j]` expresses `xj` in the parameters `t0, t1, ...`,
    /// where `tk` is bound to the column `free_cols[k]`.
    Solved {
        solution: Vec<Affine<R>>,
        free_cols: Vec<usize>
    }
}

impl<R> Solution<R>
where R: Field, for<'a> &'a R: FieldOps<R> {
    pub fn is_consistent(&self) -> bool {
        matches!(self, Solution::Solved { .. })
    }

    pub fn is_unique(&self) -> bool {
        matches!(self, Solution::Solved { free_cols, .. } if free_cols.is_empty())
    }

    pub fn solution(&self) -> Option<&[Affine<R>]> {
        match self {
            Solution::Solved { solution, .. } => Some(solution),
            Solution::Inconsistent => None
        }
    }

    pub fn free_cols(&self) -> &[usize] {
        match self {
            Solution::Solved { free_cols, .. } => free_cols,
            Solution::Inconsistent => &[]
        }
    }

    pub fn n_params(&self) -> usize {
        self.free_cols().len()
    }

    /// The solution with `tk = values[k]`.
    pub fn eval(&self, values: &[R]) -> Option<Vec<R>> {
        assert_eq!(values.len(), self.n_params());
        let solution = self.solution()?;
        Some(solution.iter().map(|x| x.eval(values)).collect())
    }

    /// The solution with all parameters set to zero.
    pub fn particular(&self) -> Option<Vec<R>> {
        let zeros = vec![R::zero(); self.n_params()];
        self.eval(&zeros)
    }
}

impl<R> Display for Solution<R>
where R: Field, for<'a> &'a R: FieldOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solution::Inconsistent => write!(f, "inconsistent"),
            Solution::Solved { solution, .. } => {
                for (j, x) in solution.iter().enumerate() {
                    if j > 0 { writeln!(f)? }
                    write!(f, "x{j} = {x}")?;
                }
                Ok(())
            }
        }
    }
}

/// Solves the system given by the augmented matrix `[A | b]` with
/// `n_vars` unknowns.
///
/// `augmented` is expected to be in row echelon form. Otherwise it is
/// reduced first, which leaves the solution set unchanged.
pub fn back_substitute<R>(augmented: &Mat<R>, n_vars: usize) -> Result<Solution<R>, SolveError>
where R: Field, for<'a> &'a R: FieldOps<R> {
    let n = augmented.ncols();
    if n != n_vars + 1 {
        return Err(SolveError::Malformed { expected: n_vars + 1, actual: n })
    }

    debug!("start back-substitution: {:?}, n_vars = {n_vars}.", augmented.shape());

    let reduced;
    let target = if is_echelon(augmented) {
        augmented
    } else {
        warn!("input is not in echelon form, reducing first.");
        reduced = reduce_to_ref(augmented.clone()).destruct().0;
        &reduced
    };

    let res = BackSubst::new(target, n_vars).process();

    debug!("back-substitution done: consistent = {}, free: {:?}.", res.is_consistent(), res.free_cols());

    Ok(res)
}

/// Solves `A x = b` by reducing `[A | b]` and back-substituting.
pub fn solve<R>(a: &Mat<R>, b: &[R]) -> Result<Solution<R>, SolveError>
where R: Field, for<'a> &'a R: FieldOps<R> {
    if b.len() != a.nrows() {
        return Err(SolveError::DimMismatch { expected: a.nrows(), actual: b.len() })
    }

    let e = reduce_to_ref(a.augment(b)).destruct().0;
    back_substitute(&e, a.ncols())
}

/// Least-squares solutions of `A x = b`, i.e. the solutions of
/// `AᵀA x = Aᵀb`, together with the residual `b - A x`.
///
/// The residual is the same for every solution in the family.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LeastSquares<R>
where R: Field, for<'a> &'a R: FieldOps<R> {
    pub solution: Solution<R>,
    pub residual: Vec<R>,
    pub residual_norm2: R
}

pub fn least_squares<R>(a: &Mat<R>, b: &[R]) -> Result<LeastSquares<R>, SolveError>
where R: Field, for<'a> &'a R: FieldOps<R> {
    if b.len() != a.nrows() {
        return Err(SolveError::DimMismatch { expected: a.nrows(), actual: b.len() })
    }

    let at = a.transpose();
    let ata = &at * a;
    let atb = at.apply(b);

    debug!("least squares: normal equations {:?}.", ata.shape());

    let solution = solve(&ata, &atb)?;
    let Some(x) = solution.particular() else {
        panic!("normal equations must be consistent.")
    };

    let residual: Vec<R> = b.iter().zip(a.apply(&x)).map(|(bi, ai)| bi - &ai).collect();
    let residual_norm2: R = residual.iter().map(|r| r * r).sum();

    debug!("|b - Ax|^2 = {residual_norm2}.");

    Ok(LeastSquares { solution, residual, residual_norm2 })
}

struct BackSubst<'a, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    target: &'a Mat<R>,
    n_vars: usize,
    pivots: Vec<Option<usize>>,
    free_cols: Vec<usize>,
    values: Vec<Option<Affine<R>>>
}

impl<'a, R> BackSubst<'a, R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn new(target: &'a Mat<R>, n_vars: usize) -> Self {
        Self {
            target,
            n_vars,
            pivots: vec![],
            free_cols: vec![],
            values: vec![None; n_vars]
        }
    }

    fn process(mut self) -> Solution<R> {
        if let Some(i) = self.find_inconsistent_row() {
            trace!("row {i} is inconsistent.");
            return Solution::Inconsistent
        }

        self.identify_pivots();
        self.bind_free_vars();
        self.substitute();

        self.result()
    }

    fn find_inconsistent_row(&self) -> Option<usize> {
        let (a, n) = (self.target, self.n_vars);
        (0..a.nrows()).find(|&i|
            a.leading_col(i, n).is_none() && !a[(i, n)].is_zero()
        )
    }

    fn identify_pivots(&mut self) {
        let (a, n) = (self.target, self.n_vars);
        self.pivots = (0..a.nrows()).map(|i| a.leading_col(i, n)).collect();

        trace!("pivots: {:?}", self.pivots);
    }

    fn bind_free_vars(&mut self) {
        let pivot_cols: BTreeSet<_> = self.pivots.iter().flatten().copied().collect();
        self.free_cols = (0..self.n_vars).filter(|j| !pivot_cols.contains(j)).collect();

        for (k, &j) in self.free_cols.iter().enumerate() {
            self.values[j] = Some(Affine::from_param(Param(k)));
        }

        trace!("free: {:?}", self.free_cols);
    }

    fn substitute(&mut self) {
        let (a, n) = (self.target, self.n_vars);

        for i in (0..a.nrows()).rev() {
            let Some(pc) = self.pivots[i] else {
                continue
            };

            let mut x = Affine::from_const(a[(i, n)].clone());

            for j in pc + 1 .. n {
                let c = &a[(i, j)];
                if c.is_zero() { continue }

                let Some(v) = &self.values[j] else {
                    panic!("x{j} is unresolved at row {i}.")
                };
                x -= v * c;
            }

            x /= &a[(i, pc)];

            trace!("x{pc} = {x}");

            self.values[pc] = Some(x);
        }
    }

    fn result(self) -> Solution<R> {
        let solution = self.values.into_iter().map(|v|
            v.unwrap_or_else(Affine::zero)
        ).collect();

        Solution::Solved { solution, free_cols: self.free_cols }
    }
}
