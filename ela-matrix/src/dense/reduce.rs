use log::{debug, trace};
use ela::{Field, FieldOps};
use crate::dense::*;
use crate::MatTrait;

/// Reduces `target` to row echelon form, returning the reduced matrix
/// together with its pivot columns. Pivots are not normalized.
pub fn reduce_to_ref<R>(target: Mat<R>) -> RefResult<R>
where R: Field, for<'a> &'a R: FieldOps<R> {
    debug!("start ref: {:?} over {}.", target.shape(), R::math_symbol());
    trace!("{}", target);

    let mut calc = RefCalc::new(target);

    calc.process();

    debug!("ref done, pivots: {:?}.", calc.pivots);
    trace!("{}", calc.target);

    calc.result()
}

/// Whether each nonzero row of `target` starts strictly right of the
/// row above it, and all zero rows are at the bottom.
pub fn is_echelon<R>(target: &Mat<R>) -> bool
where R: Field, for<'a> &'a R: FieldOps<R> {
    let n = target.ncols();
    let mut prev: Option<usize> = None;
    let mut seen_zero = false;

    for i in 0..target.nrows() {
        match target.leading_col(i, n) {
            None => seen_zero = true,
            Some(j) => {
                if seen_zero || prev.is_some_and(|p| p >= j) {
                    return false
                }
                prev = Some(j)
            }
        }
    }
    true
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefResult<R>
where R: Field, for<'a> &'a R: FieldOps<R> {
    result: Mat<R>,
    pivots: Vec<usize>
}

impl<R> RefResult<R>
where R: Field, for<'a> &'a R: FieldOps<R> {
    pub(crate) fn new(result: Mat<R>, pivots: Vec<usize>) -> Self {
        Self { result, pivots }
    }

    pub fn result(&self) -> &Mat<R> {
        &self.result
    }

    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    pub fn destruct(self) -> (Mat<R>, Vec<usize>) {
        (self.result, self.pivots)
    }
}

#[derive(Debug)]
pub struct RefCalc<R>
where R: Field, for<'a> &'a R: FieldOps<R> {
    target: Mat<R>,
    pivots: Vec<usize>
}

impl<R> RefCalc<R>
where R: Field, for<'a> &'a R: FieldOps<R> {
    pub fn new(target: Mat<R>) -> Self {
        RefCalc { target, pivots: vec![] }
    }

    pub fn result(self) -> RefResult<R> {
        RefResult::new(self.target, self.pivots)
    }

    pub fn process(&mut self) {
        let (m, n) = self.target.shape();
        let mut i = 0;

        for j in 0..n {
            if i >= m { break }
            if self.eliminate_step(i, j) {
                i += 1;
            }
        }
    }

    fn eliminate_step(&mut self, i: usize, j: usize) -> bool {
        let Some(i_p) = self.select_pivot(i, j) else {
            return false
        };

        trace!("select-pivot: ({i_p}, {j})");

        if i_p > i {
            self.swap_rows(i, i_p);
        }

        self.pivots.push(j);
        self.eliminate_below(i, j);

        true
    }

    // rows above `below_i` already hold pivots, so zero rows are never chosen.
    fn select_pivot(&self, below_i: usize, j: usize) -> Option<usize> {
        (below_i..self.target.nrows()).find(|&i|
            !self.target[(i, j)].is_zero()
        )
    }

    fn eliminate_below(&mut self, i: usize, j: usize) {
        let p = self.target[(i, j)].clone();
        assert!(!p.is_zero());

        for i1 in i + 1 .. self.target.nrows() {
            let a = &self.target[(i1, j)];
            if a.is_zero() { continue }

            let r = -(a / &p);
            self.add_row_to(i, i1, &r);

            debug_assert!(self.target[(i1, j)].is_zero());
        }
    }

    fn swap_rows(&mut self, i: usize, j: usize) {
        self.target.swap_rows(i, j);
        trace!("swap-rows: ({i}, {j})\n{}", self.target);
    }

    fn add_row_to(&mut self, i: usize, j: usize, r: &R) {
        self.target.add_row_to(i, j, r);
        trace!("add-row: {i} * ({r}) to {j}\n{}", self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use ela::Ratio;

    type Q = Ratio<i64>;

    fn mat<const N: usize>(shape: (usize, usize), data: [i64; N]) -> Mat<Q> {
        Mat::from_data(shape, data.map(Q::from_numer))
    }

    fn assert_zero_below_pivots(res: &RefResult<Q>) {
        let a = res.result();
        for (i, &j) in res.pivots().iter().enumerate() {
            assert!(!a[(i, j)].is_zero());
            for i1 in i + 1 .. a.nrows() {
                assert!(a[(i1, j)].is_zero());
            }
        }
    }

    #[test]
    fn init() {
        let a = mat((2, 3), [1,2,3,4,5,6]);
        let calc = RefCalc::new(a.clone());
        let res = calc.result();

        assert_eq!(res.result(), &a);
        assert!(res.pivots().is_empty());
    }

    #[test]
    fn square_full_rank() {
        let a = mat((3, 3), [
            2, 1, -1,
            -3, -1, 2,
            -2, 1, 2
        ]);
        let res = reduce_to_ref(a);

        assert_eq!(res.pivots(), &[0, 1, 2]);
        assert_eq!(res.rank(), 3);
        assert!(is_echelon(res.result()));
        assert_zero_below_pivots(&res);

        // pivots are left as they are.
        assert_eq!(res.result()[(0, 0)], Q::from(2));
    }

    #[test]
    fn needs_swap() {
        let a = mat((3, 3), [
            0, 2, 1,
            0, 0, 3,
            4, 1, 0
        ]);
        let res = reduce_to_ref(a);

        assert_eq!(res.pivots(), &[0, 1, 2]);
        assert_eq!(res.result(), &mat((3, 3), [
            4, 1, 0,
            0, 2, 1,
            0, 0, 3
        ]));
    }

    #[test]
    fn skip_zero_column() {
        let a = mat((3, 4), [
            0, 1, 2, 3,
            0, 2, 4, 7,
            0, 3, 6, 9
        ]);
        let res = reduce_to_ref(a);

        assert_eq!(res.pivots(), &[1, 3]);
        assert!(is_echelon(res.result()));
        assert!(res.result().is_zero_row(2));
        assert_zero_below_pivots(&res);
    }

    #[test]
    fn more_rows_than_rank() {
        let a = mat((5, 2), [
            0, 0,
            1, 2,
            0, 0,
            2, 4,
            3, 7
        ]);
        let res = reduce_to_ref(a);

        assert_eq!(res.pivots(), &[0, 1]);
        assert!(is_echelon(res.result()));
        for i in 2..5 {
            assert!(res.result().is_zero_row(i));
        }
    }

    #[test]
    fn wide() {
        let a = mat((2, 5), [
            1, 2, 0, 1, 1,
            2, 4, 1, 3, 0
        ]);
        let res = reduce_to_ref(a);

        assert_eq!(res.pivots(), &[0, 2]);
        assert_eq!(res.result(), &mat((2, 5), [
            1, 2, 0, 1, 1,
            0, 0, 1, 1, -2
        ]));
    }

    #[test]
    fn fractional_entries() {
        let a = Mat::from_data((2, 2), [
            Q::new(1, 3), Q::new(1, 2),
            Q::new(1, 4), Q::new(1, 5)
        ]);
        let res = reduce_to_ref(a);

        // 1/5 - (3/4)(1/2) = -7/40
        assert_eq!(res.result()[(1, 1)], Q::new(-7, 40));
        assert!(res.result()[(1, 0)].is_zero());
    }

    #[test]
    fn zero_matrix() {
        let a: Mat<Q> = Mat::zero((3, 2));
        let res = reduce_to_ref(a.clone());

        assert!(res.pivots().is_empty());
        assert_eq!(res.result(), &a);
    }

    #[test]
    fn empty_matrix() {
        let a: Mat<Q> = Mat::zero((0, 3));
        let res = reduce_to_ref(a);
        assert!(res.pivots().is_empty());
    }

    #[test]
    fn idempotent() {
        let a = mat((4, 4), [
            1, 2, 1, 0,
            2, 4, 0, 2,
            1, 2, 3, -2,
            0, 1, 1, 1
        ]);
        let (e, pivots) = reduce_to_ref(a).destruct();
        let (e2, pivots2) = reduce_to_ref(e.clone()).destruct();

        assert_eq!(pivots, pivots2);
        assert_eq!(e, e2);
    }

    #[test]
    fn echelon_check() {
        assert!(is_echelon(&mat((2, 2), [1, 1, 0, 1])));
        assert!(is_echelon(&mat((2, 2), [0, 1, 0, 0])));
        assert!(!is_echelon(&mat((2, 2), [0, 1, 1, 0])));
        assert!(!is_echelon(&mat((2, 2), [1, 1, 2, 0])));
        assert!(!is_echelon(&mat((3, 2), [1, 1, 0, 0, 0, 1])));
    }
}
