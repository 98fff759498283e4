// SPDX-License-Identifier: MIT OR Apache-2.0

use core::{
    mem::{ManuallyDrop, MaybeUninit},
    ptr,
};

/// Zips two arrays together and applies the function `f` to each memberwise element,
/// returning a fixed size array of the results.
///
/// Preferred over chaining iterator adapters because no intermediate array of tuples
/// is ever materialized.
#[must_use]
#[inline]
pub fn zip_map<T, U, Res, F, const N: usize>(lhs: [T; N], rhs: [U; N], mut f: F) -> [Res; N]
where
    F: FnMut(T, U) -> Res,
{
    let (lhs, rhs) = (ManuallyDrop::new(lhs), ManuallyDrop::new(rhs));
    let mut result = [const { MaybeUninit::<Res>::uninit() }; N];

    for i in 0..N {
        unsafe {
            let slot = result.get_unchecked_mut(i);
            let lhs = ptr::read(lhs.get_unchecked(i));
            let rhs = ptr::read(rhs.get_unchecked(i));

            slot.write(f(lhs, rhs));
        }
    }

    unsafe { array_assume_init(result) }
}

#[must_use]
#[inline]
pub(crate) const fn array_get_checked<T>(array: &[T], index: usize) -> Option<&T> {
    if index < array.len() {
        unsafe { Some(array_get_unchecked(array, index)) }
    } else {
        None
    }
}

#[must_use]
#[inline]
pub(crate) const fn array_get_mut_checked<T>(array: &mut [T], index: usize) -> Option<&mut T> {
    if index < array.len() {
        unsafe { Some(array_get_unchecked_mut(array, index)) }
    } else {
        None
    }
}

#[must_use]
#[inline]
pub(crate) const unsafe fn array_get_unchecked<T>(array: &[T], index: usize) -> &T {
    unsafe { &*array.as_ptr().add(index) }
}

#[must_use]
#[inline]
pub(crate) const unsafe fn array_get_unchecked_mut<T>(array: &mut [T], index: usize) -> &mut T {
    unsafe { &mut *array.as_mut_ptr().add(index) }
}

/// Stable stand-in for `MaybeUninit::array_assume_init`.
#[must_use]
#[inline]
pub(crate) const unsafe fn array_assume_init<T, const N: usize>(
    array: [MaybeUninit<T>; N],
) -> [T; N] {
    let mut result = MaybeUninit::<[T; N]>::uninit();

    unsafe {
        ptr::copy_nonoverlapping::<[T; N]>(array.as_ptr().cast(), result.as_mut_ptr().cast(), 1);
        MaybeUninit::assume_init(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_map() {
        let a = [1, 2, 3, 4];
        let b = [10, 20, 30, 40];

        assert_eq!(zip_map(a, b, |x, y| x + y), [11, 22, 33, 44]);

        let strings = ["a", "b", "c"].map(String::from);
        let suffixes = ["x", "y", "z"];
        let joined = zip_map(strings, suffixes, |s, suffix| s + suffix);
        assert_eq!(joined, ["ax", "by", "cz"].map(String::from));
    }
}
