use std::collections::BTreeMap;
use std::fmt::{Display, Debug};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign, Mul, MulAssign, Div, DivAssign};
use auto_impl_ops::auto_ops;
use num_traits::Zero;
use crate::{Ring, RingOps, Field, FieldOps};

/// The `k`-th free parameter `tk` of a solution family.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Debug, derive_more::Display)]
#[display("t{}", _0)]
pub struct Param(pub usize);

/// An affine expression `c + a0 t0 + a1 t1 + ...` over `R`.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Affine<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    constant: R,
    terms: BTreeMap<Param, R>
}

impl<R> Affine<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    pub fn new<I>(constant: R, terms: I) -> Self
    where I: IntoIterator<Item = (Param, R)> {
        let mut res = Self::from_const(constant);
        for (p, r) in terms {
            res.add_term(p, r);
        }
        res.clean();
        res
    }

    pub fn from_const(constant: R) -> Self {
        Self { constant, terms: BTreeMap::new() }
    }

    pub fn from_param(p: Param) -> Self {
        Self::new(R::zero(), [(p, R::one())])
    }

    pub fn constant(&self) -> &R {
        &self.constant
    }

    pub fn coeff(&self, p: &Param) -> R {
        self.terms.get(p).cloned().unwrap_or_else(R::zero)
    }

    pub fn is_const(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn as_const(&self) -> Option<&R> {
        if self.is_const() {
            Some(&self.constant)
        } else {
            None
        }
    }

    pub fn is_param(&self) -> bool {
        self.constant.is_zero() &&
        self.terms.len() == 1 &&
        self.terms.values().all(|r| r.is_one())
    }

    /// Substitutes `values[k]` for `tk`.
    ///
    /// Panics if some parameter of `self` has no value.
    pub fn eval(&self, values: &[R]) -> R {
        self.terms.iter().fold(self.constant.clone(), |mut res, (p, r)| {
            assert!(p.0 < values.len(), "no value given for {p}.");
            res += r * &values[p.0];
            res
        })
    }

    fn add_term(&mut self, p: Param, r: R) {
        if r.is_zero() { return }

        if let Some(v) = self.terms.get_mut(&p) {
            v.add_assign(r);
        } else {
            self.terms.insert(p, r);
        }
    }

    fn clean(&mut self) {
        self.terms.retain(|_, r| !r.is_zero());
    }

    pub fn map_coeffs<F>(&self, f: F) -> Self
    where F: Fn(&R) -> R {
        Self::new(
            f(&self.constant),
            self.terms.iter().map(|(p, r)| (*p, f(r)))
        )
    }
}

impl<R> Display for Affine<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::util::format::lc;

        let head = (!self.constant.is_zero()).then(|| (String::from("1"), &self.constant));
        let tail = self.terms.iter().map(|(p, r)| (p.to_string(), r));
        let s = lc(head.into_iter().chain(tail));

        f.pad(&s)
    }
}

impl<R> Debug for Affine<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<R> Zero for Affine<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn zero() -> Self {
        Self::from_const(R::zero())
    }

    fn is_zero(&self) -> bool {
        self.constant.is_zero() && self.terms.is_empty()
    }
}

impl<R> Neg for Affine<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.map_coeffs(|r| -r)
    }
}

impl<R> Neg for &Affine<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    type Output = Affine<R>;
    fn neg(self) -> Self::Output {
        self.map_coeffs(|r| -r)
    }
}

#[auto_ops]
impl<R> AddAssign<&Affine<R>> for Affine<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn add_assign(&mut self, rhs: &Self) {
        self.constant += &rhs.constant;
        for (p, r) in rhs.terms.iter() {
            self.add_term(*p, r.clone());
        }
        self.clean()
    }
}

#[auto_ops]
impl<R> SubAssign<&Affine<R>> for Affine<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn sub_assign(&mut self, rhs: &Self) {
        self.constant -= &rhs.constant;
        for (p, r) in rhs.terms.iter() {
            self.add_term(*p, -r);
        }
        self.clean()
    }
}

#[auto_ops]
impl<R> MulAssign<&R> for Affine<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn mul_assign(&mut self, rhs: &R) {
        self.constant *= rhs;
        for r in self.terms.values_mut() {
            *r *= rhs;
        }
        self.clean()
    }
}

#[auto_ops]
impl<R> DivAssign<&R> for Affine<R>
where R: Field, for<'x> &'x R: FieldOps<R> {
    fn div_assign(&mut self, rhs: &R) {
        assert!(!rhs.is_zero(), "division by zero.");
        self.constant /= rhs;
        for r in self.terms.values_mut() {
            *r /= rhs;
        }
    }
}

#[cfg(feature = "serde")]
impl<R> serde::Serialize for Affine<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        serializer.collect_str(self)
    }
}
