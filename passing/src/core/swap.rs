//! The three swap variants.
//!
//! Each variant returns the callee's view of its two parameters after the
//! exchange, so callers can report what the function saw without the core
//! doing any printing.

use crate::core::types::Pair;

/// Swap two integers received by value.
///
/// Only the local copies are exchanged; the caller's variables are untouched.
pub fn swap_by_value(mut x: i32, mut y: i32) -> Pair {
    let tmp = x;
    x = y;
    y = tmp;
    Pair::new(x, y)
}

/// Swap the integers stored at two caller-owned locations.
///
/// `x` and `y` may point to the same location, in which case the value is
/// left as it was.
///
/// # Safety
///
/// Both pointers must be non-null, aligned, and valid for reads and writes of
/// an `i32` for the duration of the call. No other reference to either
/// location may be live while the call runs.
#[allow(unsafe_code)]
pub unsafe fn swap_by_pointer(x: *mut i32, y: *mut i32) -> Pair {
    // SAFETY: upheld by the caller per the contract above.
    unsafe {
        let tmp = *x;
        *x = *y;
        *y = tmp;
        Pair::new(*x, *y)
    }
}

/// Swap two integers through exclusive references to the caller's storage.
pub fn swap_by_reference(x: &mut i32, y: &mut i32) -> Pair {
    let tmp = *x;
    *x = *y;
    *y = tmp;
    Pair::new(*x, *y)
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;

    #[test]
    fn value_swap_leaves_caller_untouched() {
        let (a, b) = (5, 2);
        let seen = swap_by_value(a, b);
        assert_eq!(seen, Pair::new(2, 5));
        assert_eq!((a, b), (5, 2));
    }

    #[test]
    fn pointer_swap_exchanges_caller_values() {
        let (mut a, mut b) = (5, 2);
        let seen = unsafe { swap_by_pointer(&raw mut a, &raw mut b) };
        assert_eq!(seen, Pair::new(2, 5));
        assert_eq!((a, b), (2, 5));
    }

    #[test]
    fn reference_swap_exchanges_caller_values() {
        let (mut a, mut b) = (5, 2);
        let seen = swap_by_reference(&mut a, &mut b);
        assert_eq!(seen, Pair::new(2, 5));
        assert_eq!((a, b), (2, 5));
    }

    #[test]
    fn pointer_swap_twice_restores_order() {
        let (mut a, mut b) = (5, 2);
        unsafe {
            swap_by_pointer(&raw mut a, &raw mut b);
            swap_by_pointer(&raw mut a, &raw mut b);
        }
        assert_eq!((a, b), (5, 2));
    }

    #[test]
    fn reference_swap_twice_restores_order() {
        let (mut a, mut b) = (5, 2);
        swap_by_reference(&mut a, &mut b);
        swap_by_reference(&mut a, &mut b);
        assert_eq!((a, b), (5, 2));
    }

    #[test]
    fn argument_order_does_not_matter() {
        let (mut a1, mut b1) = (5, 2);
        let (mut a2, mut b2) = (5, 2);
        swap_by_reference(&mut a1, &mut b1);
        swap_by_reference(&mut b2, &mut a2);
        assert_eq!((a1, b1), (a2, b2));

        let (mut a3, mut b3) = (5, 2);
        unsafe { swap_by_pointer(&raw mut b3, &raw mut a3) };
        assert_eq!((a3, b3), (2, 5));
    }

    #[test]
    fn pointer_swap_same_location_is_noop() {
        let mut a = 9;
        let p = &raw mut a;
        let seen = unsafe { swap_by_pointer(p, p) };
        assert_eq!(seen, Pair::new(9, 9));
        assert_eq!(a, 9);
    }

    #[test]
    fn extreme_values_swap_without_overflow() {
        let (mut a, mut b) = (i32::MIN, i32::MAX);
        swap_by_reference(&mut a, &mut b);
        assert_eq!((a, b), (i32::MAX, i32::MIN));
    }
}
