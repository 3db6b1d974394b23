use log::{debug, trace};
use ela::{Field, FieldOps};
use crate::dense::*;
use crate::MatTrait;

/// Reduces `target` to reduced row echelon form: every pivot is `1`
/// and is the only nonzero entry of its column.
pub fn rref<R>(target: Mat<R>) -> RefResult<R>
where R: Field, for<'a> &'a R: FieldOps<R> {
    let (mut a, pivots) = reduce_to_ref(target).destruct();

    debug!("start rref, pivots: {:?}.", pivots);

    for (i, &j) in pivots.iter().enumerate().rev() {
        normalize_row(&mut a, i, j);
        clear_above(&mut a, i, j);
    }

    debug!("rref done.");
    trace!("{}", a);

    RefResult::new(a, pivots)
}

/// Whether `target` is in reduced row echelon form.
pub fn is_rref<R>(target: &Mat<R>) -> bool
where R: Field, for<'a> &'a R: FieldOps<R> {
    if !is_echelon(target) {
        return false
    }

    let n = target.ncols();
    (0..target.nrows()).all(|i| {
        let Some(j) = target.leading_col(i, n) else {
            return true
        };
        target[(i, j)].is_one() && (0..target.nrows()).all(|i1|
            i1 == i || target[(i1, j)].is_zero()
        )
    })
}

fn normalize_row<R>(a: &mut Mat<R>, i: usize, j: usize)
where R: Field, for<'a> &'a R: FieldOps<R> {
    let p = &a[(i, j)];
    if p.is_one() { return }

    let Some(u) = p.inv() else {
        return
    };
    a.mul_row(i, &u);

    trace!("normalize: row {i} * ({u})");
}

fn clear_above<R>(a: &mut Mat<R>, i: usize, j: usize)
where R: Field, for<'a> &'a R: FieldOps<R> {
    for i1 in 0..i {
        let r = -&a[(i1, j)];
        if r.is_zero() { continue }

        a.add_row_to(i, i1, &r);

        trace!("add-row: {i} * ({r}) to {i1}");
    }
}
