use std::ops::{Div, Rem};
use std::str::FromStr;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, One};
use crate::{Elem, Ring, RingOps};

pub trait IntOps<T = Self>:
    RingOps<T> +
    Div<T, Output = T> +
    for<'a> Div<&'a T, Output = T> +
    Rem<T, Output = T> +
    for<'a> Rem<&'a T, Output = T>
{}

/// Integers usable as numerators and denominators of [`Ratio`](crate::Ratio).
pub trait Integer:
    Ring +
    IntOps +
    num_integer::Integer +
    Signed +
    Ord +
    FromStr +
    ToPrimitive
where
    for<'a> &'a Self: IntOps<Self>
{}

macro_rules! impl_integer {
    ($type:ty) => {
        impl RingOps for $type {}
        impl<'a> RingOps<$type> for &'a $type {}
        impl IntOps for $type {}
        impl<'a> IntOps<$type> for &'a $type {}

        impl Elem for $type {
            fn math_symbol() -> String {
                String::from("Z")
            }
        }

        impl Ring for $type {
            fn inv(&self) -> Option<Self> {
                if self.is_one() || (-self).is_one() {
                    Some(self.clone())
                } else {
                    None
                }
            }
        }

        impl Integer for $type {}
    }
}

impl_integer!(i32);
impl_integer!(i64);
impl_integer!(i128);
impl_integer!(BigInt);
