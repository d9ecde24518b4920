/// myproject — Arithmetic Primitives
///
/// Plain `i32` addition and multiplication.
/// Overflow follows native Rust semantics: panics in debug builds,
/// wraps in release builds. No checking or saturation on top.

/// Add two integers.
#[inline]
pub const fn add(a: i32, b: i32) -> i32 {
    a + b
}

/// Multiply two integers.
#[inline]
pub const fn multiply(a: i32, b: i32) -> i32 {
    a * b
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hint::black_box;

    #[test]
    fn test_add_positive() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(10, 20), 30);
    }

    #[test]
    fn test_add_negative() {
        assert_eq!(add(-2, -3), -5);
        assert_eq!(add(-10, 5), -5);
    }

    #[test]
    fn test_add_identity() {
        assert_eq!(add(i32::MAX, 0), i32::MAX);
        assert_eq!(add(0, i32::MIN), i32::MIN);
    }

    #[test]
    fn test_multiply_positive() {
        assert_eq!(multiply(2, 3), 6);
        assert_eq!(multiply(5, 4), 20);
    }

    #[test]
    fn test_multiply_zero() {
        assert_eq!(multiply(0, 5), 0);
        assert_eq!(multiply(10, 0), 0);
        assert_eq!(multiply(i32::MIN, 0), 0);
    }

    #[test]
    fn test_multiply_signs() {
        assert_eq!(multiply(-3, 4), -12);
        assert_eq!(multiply(-3, -4), 12);
        assert_eq!(multiply(i32::MAX, 1), i32::MAX);
    }

    #[test]
    fn test_usable_in_const_context() {
        const SUM: i32 = add(40, 2);
        const PRODUCT: i32 = multiply(6, 7);
        assert_eq!(SUM, 42);
        assert_eq!(PRODUCT, 42);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overflow")]
    fn test_add_overflow_panics_in_debug() {
        add(black_box(i32::MAX), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overflow")]
    fn test_multiply_overflow_panics_in_debug() {
        multiply(black_box(i32::MIN), -1);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_add_overflow_wraps_in_release() {
        assert_eq!(add(black_box(i32::MAX), 1), i32::MIN);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_multiply_overflow_wraps_in_release() {
        assert_eq!(multiply(black_box(i32::MIN), -1), i32::MIN);
    }
}
