use std::cmp::Ordering;
use std::fmt::{Display, Debug};
use std::iter::Sum;
use std::str::FromStr;
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, DivAssign, Neg};
use auto_impl_ops::auto_ops;
use num_traits::{Zero, One};
use crate::{Elem, Ring, RingOps, Field, FieldOps, Integer, IntOps};

/// An exact fraction `numer / denom`.
///
/// Always stored in lowest terms with `denom > 0`, so equality
/// is equality of the stored parts.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ratio<T> {
    numer: T,
    denom: T,
}

impl<T> Ratio<T> {
    pub fn numer(&self) -> &T {
        &self.numer
    }

    pub fn denom(&self) -> &T {
        &self.denom
    }

    pub fn into_parts(self) -> (T, T) {
        (self.numer, self.denom)
    }
}

impl<T> Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    /// Panics if `denom` is zero.
    pub fn new(numer: T, denom: T) -> Self {
        assert!(!denom.is_zero(), "zero denominator.");
        Self::normalized(numer, denom)
    }

    pub fn checked_new(numer: T, denom: T) -> Option<Self> {
        (!denom.is_zero()).then(|| Self::normalized(numer, denom))
    }

    pub fn from_numer(numer: T) -> Self {
        Self { numer, denom: T::one() }
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    pub fn abs(&self) -> Self {
        Self { numer: self.numer.abs(), denom: self.denom.clone() }
    }

    pub fn to_f64(&self) -> Option<f64> {
        let p = self.numer.to_f64()?;
        let q = self.denom.to_f64()?;
        Some(p / q)
    }

    fn normalized(numer: T, denom: T) -> Self {
        debug_assert!(!denom.is_zero());

        if numer.is_zero() {
            return Self::zero()
        }

        let g = numer.gcd(&denom);
        let (p, q) = if g.is_one() {
            (numer, denom)
        } else {
            (&numer / &g, &denom / &g)
        };

        if q.is_negative() {
            Self { numer: -p, denom: -q }
        } else {
            Self { numer: p, denom: q }
        }
    }

    // `op` applied to the numerators over the common denominator.
    fn combine<F>(&self, rhs: &Self, op: F) -> Self
    where F: FnOnce(T, T) -> T {
        if self.denom == rhs.denom {
            let p = op(self.numer.clone(), rhs.numer.clone());
            return Self::normalized(p, self.denom.clone())
        }

        let l = self.denom.lcm(&rhs.denom);
        let x = &self.numer * &(&l / &self.denom);
        let y = &rhs.numer * &(&l / &rhs.denom);

        Self::normalized(op(x, y), l)
    }
}

impl<T> From<i32> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn from(i: i32) -> Self {
        Self::from_numer(T::from(i))
    }
}

// "3", "-2", "1/4", "6/-8", "0.5", "-1.25", ".5", "1e3", "2.5E-2"
impl<T> FromStr for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let fail = || format!("cannot parse '{s}' as a rational number.");
        let int = |t: &str| t.trim().parse::<T>().map_err(|_| fail());

        if let Some((p, q)) = s.split_once('/') {
            let (p, q) = (int(p)?, int(q)?);
            return Self::checked_new(p, q).ok_or_else(||
                format!("zero denominator: '{s}'.")
            )
        }

        let decimal = regex::Regex::new(r"^([+-]?)([0-9]*)(?:\.([0-9]+))?(?:[eE]([+-]?[0-9]+))?$").map_err(|e| e.to_string())?;
        let Some(c) = decimal.captures(s) else {
            return Err(fail())
        };

        if c.get(3).is_none() && c.get(4).is_none() {
            return int(s).map(Self::from_numer)
        }

        let (sign, whole) = (&c[1], &c[2]);
        let frac = c.get(3).map_or("", |m| m.as_str());
        if whole.is_empty() && frac.is_empty() {
            return Err(fail())
        }

        // value = digits * 10^(exp - frac.len())
        let exp = match c.get(4) {
            Some(m) => m.as_str().parse::<i64>().map_err(|_| fail())?,
            None    => 0
        };
        let shift = exp - (frac.len() as i64);
        let zeros = "0".repeat(usize::try_from(shift.unsigned_abs()).map_err(|_| fail())?);

        if shift >= 0 {
            let p = int(format!("{sign}{whole}{frac}{zeros}").as_str())?;
            Ok(Self::from_numer(p))
        } else {
            let p = int(format!("{sign}{whole}{frac}").as_str())?;
            let q = int(format!("1{zeros}").as_str())?;
            Ok(Self::new(p, q))
        }
    }
}

impl<T> Default for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T> Display for Ratio<T>
where T: Display + One + PartialEq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denom.is_one() {
            f.pad(&self.numer.to_string())
        } else {
            f.pad(&format!("{}/{}", self.numer, self.denom))
        }
    }
}

impl<T> Debug for Ratio<T>
where T: Display + One + PartialEq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<T> Zero for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn zero() -> Self {
        Self::from_numer(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T> One for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn one() -> Self {
        Self::from_numer(T::one())
    }

    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }
}

impl<T> Neg for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self { numer: -self.numer, denom: self.denom }
    }
}

impl<T> Neg for &Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    type Output = Ratio<T>;
    fn neg(self) -> Self::Output {
        Ratio { numer: -&self.numer, denom: self.denom.clone() }
    }
}

#[auto_ops]
impl<T> AddAssign<&Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn add_assign(&mut self, rhs: &Ratio<T>) {
        if rhs.is_zero() { return }
        *self = self.combine(rhs, |x, y| x + y)
    }
}

#[auto_ops]
impl<T> SubAssign<&Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn sub_assign(&mut self, rhs: &Ratio<T>) {
        if rhs.is_zero() { return }
        *self = self.combine(rhs, |x, y| x - y)
    }
}

// (a/b)(c/d) = (a/g)(c/h) / (b/h)(d/g) with g = gcd(a, d), h = gcd(c, b),
// which is already in lowest terms.
#[auto_ops]
impl<T> MulAssign<&Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn mul_assign(&mut self, rhs: &Ratio<T>) {
        if self.is_zero() || rhs.is_one() {
            return
        }
        if rhs.is_zero() {
            *self = Self::zero();
            return
        }

        let g = self.numer.gcd(&rhs.denom);
        let h = rhs.numer.gcd(&self.denom);

        let p = (&self.numer / &g) * (&rhs.numer / &h);
        let q = (&self.denom / &h) * (&rhs.denom / &g);

        *self = Self { numer: p, denom: q }
    }
}

#[auto_ops]
impl<T> DivAssign<&Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn div_assign(&mut self, rhs: &Ratio<T>) {
        let Some(r) = rhs.inv() else {
            panic!("division by zero.")
        };
        *self *= r
    }
}

impl<T> Sum for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, r| acc + r)
    }
}

impl<'a, T> Sum<&'a Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn sum<I: Iterator<Item = &'a Ratio<T>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, r| acc + r)
    }
}

impl<T> RingOps for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> RingOps<Ratio<T>> for &Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> FieldOps for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> FieldOps<Ratio<T>> for &Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> Elem for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn math_symbol() -> String {
        match T::math_symbol().as_str() {
            "Z" => String::from("Q"),
            t   => format!("Frac({t})")
        }
    }
}

impl<T> Ring for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self::normalized(self.denom.clone(), self.numer.clone()))
        }
    }
}

impl<T> Field for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {}

// denominators are positive.
impl<T> Ord for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        let l = &self.numer * &other.denom;
        let r = &other.numer * &self.denom;
        l.cmp(&r)
    }
}

impl<T> PartialOrd for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Ratio<T>
where T: Display + One + PartialEq {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: serde::Deserializer<'de> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
