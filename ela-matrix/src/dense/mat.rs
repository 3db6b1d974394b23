use std::ops::{Mul, MulAssign, Index, IndexMut, Range};
use nalgebra::{DMatrix, Scalar};
use delegate::delegate;
use derive_more::Display;
use auto_impl_ops::auto_ops;
use num_traits::{Zero, One};
use ela::{Ring, RingOps};
use crate::{MatTrait, SolveError};

/// A dense `m × n` matrix. The shape is fixed once created.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub struct Mat<R>
where R: Scalar {
    inner: DMatrix<R>
}

impl<R> MatTrait for Mat<R>
where R: Scalar {
    fn shape(&self) -> (usize, usize) {
        self.inner.shape()
    }
}

impl<R> Mat<R>
where R: Scalar {
    /// Builds a matrix from its entries in row-major order.
    pub fn from_data<I>(shape: (usize, usize), data: I) -> Self
    where I: IntoIterator<Item = R> {
        DMatrix::from_row_iterator(shape.0, shape.1, data).into()
    }

    pub fn from_fn<F>(shape: (usize, usize), f: F) -> Self
    where F: FnMut(usize, usize) -> R {
        DMatrix::from_fn(shape.0, shape.1, f).into()
    }

    /// Builds a matrix from its rows, rejecting rows of unequal length.
    pub fn from_rows(rows: Vec<Vec<R>>) -> Result<Self, SolveError> {
        let m = rows.len();
        let n = rows.first().map(|r| r.len()).unwrap_or(0);

        if let Some((i, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(SolveError::Ragged { row: i, expected: n, actual: r.len() })
        }

        Ok(Self::from_data((m, n), rows.into_iter().flatten()))
    }

    pub fn row(&self, i: usize) -> Vec<R> {
        self.inner.row(i).iter().cloned().collect()
    }

    pub fn col(&self, j: usize) -> Vec<R> {
        self.inner.column(j).iter().cloned().collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<R>> + '_ {
        (0..self.nrows()).map(|i| self.row(i))
    }

    pub fn submat(&self, rows: Range<usize>, cols: Range<usize>) -> Mat<R> {
        let (i0, i1) = (rows.start, rows.end);
        let (j0, j1) = (cols.start, cols.end);

        assert!(i0 <= i1 && i1 <= self.nrows());
        assert!(j0 <= j1 && j1 <= self.ncols());

        let slice = self.inner.view((i0, j0), (i1 - i0, j1 - j0));
        Self::from(slice.clone_owned())
    }

    pub fn submat_cols(&self, cols: Range<usize>) -> Mat<R> {
        let m = self.nrows();
        self.submat(0 .. m, cols)
    }

    /// `[A | b]`
    pub fn augment(&self, b: &[R]) -> Mat<R> {
        assert_eq!(self.nrows(), b.len());

        let (m, n) = self.shape();
        Self::from_fn((m, n + 1), |i, j|
            if j < n { self[(i, j)].clone() } else { b[i].clone() }
        )
    }

    pub fn transpose(&self) -> Mat<R> {
        Self::from(self.inner.transpose())
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.inner.swap_rows(i, j);
    }
}

impl<R> Mat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    pub fn zero(shape: (usize, usize)) -> Self {
        Self::from_fn(shape, |_, _| R::zero())
    }

    pub fn id(size: usize) -> Self {
        Self::from_fn((size, size), |i, j|
            if i == j { R::one() } else { R::zero() }
        )
    }

    pub fn is_zero(&self) -> bool {
        self.inner.iter().all(|a| a.is_zero())
    }

    pub fn is_zero_row(&self, i: usize) -> bool {
        self.inner.row(i).iter().all(|a| a.is_zero())
    }

    /// Index of the first nonzero entry of row `i` within the first `n` columns.
    pub fn leading_col(&self, i: usize, n: usize) -> Option<usize> {
        (0..n).find(|&j| !self[(i, j)].is_zero())
    }

    pub fn mul_row(&mut self, i: usize, r: &R) {
        for j in 0..self.ncols() {
            self[(i, j)] *= r;
        }
    }

    /// row[j] += row[i] * r
    pub fn add_row_to(&mut self, i: usize, j: usize, r: &R) {
        assert_ne!(i, j);
        for k in 0..self.ncols() {
            let a = &self[(i, k)] * r;
            if !a.is_zero() {
                self[(j, k)] += a;
            }
        }
    }

    pub fn apply(&self, x: &[R]) -> Vec<R> {
        assert_eq!(self.ncols(), x.len());
        (0..self.nrows()).map(|i|
            x.iter().enumerate().map(|(j, a)| &self[(i, j)] * a).sum()
        ).collect()
    }
}

impl<R> From<DMatrix<R>> for Mat<R>
where R: Scalar {
    fn from(inner: DMatrix<R>) -> Self {
        Self { inner }
    }
}

impl<R> Index<(usize, usize)> for Mat<R>
where R: Scalar {
    type Output = R;
    delegate! {
        to self.inner {
            fn index(&self, index: (usize, usize)) -> &R;
        }
    }
}

impl<R> IndexMut<(usize, usize)> for Mat<R>
where R: Scalar {
    delegate! {
        to self.inner {
            fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output;
        }
    }
}

impl<R> Default for Mat<R>
where R: Scalar {
    fn default() -> Self {
        Self::from_data((0, 0), [])
    }
}

#[auto_ops]
impl<'a, 'b, R> Mul<&'b Mat<R>> for &'a Mat<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Mat<R>;
    fn mul(self, rhs: &'b Mat<R>) -> Self::Output {
        assert_eq!(self.ncols(), rhs.nrows());

        let (l, m, n) = (self.nrows(), self.ncols(), rhs.ncols());
        Mat::from_fn((l, n), |i, k|
            (0..m).map(|j| &self[(i, j)] * &rhs[(j, k)]).sum()
        )
    }
}
