use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, DivAssign, Neg};
use num_traits::{Zero, One};

/// A value that can sit in a matrix entry.
pub trait Elem:
    Default +
    PartialEq +
    Eq +
    Clone +
    Send +
    Sync +
    Display +
    Debug +
    'static
{
    fn math_symbol() -> String;
}

// Rings

pub trait RingOps<T = Self>:
    Sized +
    Neg<Output = T> +
    Add<T, Output = T> +
    for<'a> Add<&'a T, Output = T> +
    Sub<T, Output = T> +
    for<'a> Sub<&'a T, Output = T> +
    Mul<T, Output = T> +
    for<'a> Mul<&'a T, Output = T>
{}

pub trait Ring:
    Elem +
    RingOps +
    AddAssign +
    for<'a> AddAssign<&'a Self> +
    SubAssign +
    for<'a> SubAssign<&'a Self> +
    MulAssign +
    for<'a> MulAssign<&'a Self> +
    Sum<Self> +
    for<'a> Sum<&'a Self> +
    Zero +
    One +
    From<i32>
where
    for<'a> &'a Self: RingOps<Self>
{
    fn inv(&self) -> Option<Self>;

    fn is_unit(&self) -> bool {
        self.inv().is_some()
    }
}

// Fields

pub trait FieldOps<T = Self>:
    RingOps<T> +
    Div<T, Output = T> +
    for<'a> Div<&'a T, Output = T>
{}

pub trait Field:
    Ring +
    FieldOps +
    DivAssign +
    for<'a> DivAssign<&'a Self>
where
    for<'a> &'a Self: FieldOps<Self>
{}
