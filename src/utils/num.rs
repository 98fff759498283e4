// SPDX-License-Identifier: MIT OR Apache-2.0

//! The numeric vocabulary required of matrix element types.
//!
//! An element type needs closed `+` and `*` (via [`ClosedAdd`] and
//! [`ClosedMul`]) for the accumulating operations, and the additive and
//! multiplicative identities (via [`Zero`] and [`One`]) for the factory
//! constructors.

use core::{
    num::{Saturating, Wrapping},
    ops::{Add, Mul},
};

pub trait ClosedAdd: Sized + Add<Output = Self> {}
pub trait ClosedMul: Sized + Mul<Output = Self> {}

impl<T: Sized + Add<Output = Self>> ClosedAdd for T {}
impl<T: Sized + Mul<Output = Self>> ClosedMul for T {}

/// The additive identity of a type, as an associated constant.
#[doc(alias = "0")]
pub trait Zero {
    const ZERO: Self;
}

/// The multiplicative identity of a type, as an associated constant.
#[doc(alias = "1")]
pub trait One {
    const ONE: Self;
}

macro_rules! impl_identities {
    (
        $(
            $num_ty:ty => (zero = $zero:expr, one = $one:expr)
        ),* $(,)?
    ) => {
        $(
            impl Zero for $num_ty {
                const ZERO: Self = $zero;
            }

            impl One for $num_ty {
                const ONE: Self = $one;
            }
        )*
    };
}

impl_identities! {
    u8 => (zero = 0, one = 1),
    u16 => (zero = 0, one = 1),
    u32 => (zero = 0, one = 1),
    u64 => (zero = 0, one = 1),
    u128 => (zero = 0, one = 1),
    usize => (zero = 0, one = 1),

    i8 => (zero = 0, one = 1),
    i16 => (zero = 0, one = 1),
    i32 => (zero = 0, one = 1),
    i64 => (zero = 0, one = 1),
    i128 => (zero = 0, one = 1),
    isize => (zero = 0, one = 1),

    f32 => (zero = 0.0, one = 1.0),
    f64 => (zero = 0.0, one = 1.0),
}

impl<T: Zero> Zero for Wrapping<T> {
    const ZERO: Self = Wrapping(T::ZERO);
}

impl<T: One> One for Wrapping<T> {
    const ONE: Self = Wrapping(T::ONE);
}

impl<T: Zero> Zero for Saturating<T> {
    const ZERO: Self = Saturating(T::ZERO);
}

impl<T: One> One for Saturating<T> {
    const ONE: Self = Saturating(T::ONE);
}

impl<T: Zero, const N: usize> Zero for [T; N] {
    const ZERO: Self = [T::ZERO; N];
}
