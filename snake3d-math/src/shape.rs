//! Compile-time shape checks.
//!
//! Each helper expands to an inline `const` block, so calling it with an
//! unsupported dimension fails the build when the caller is instantiated.

#[inline(always)]
pub(crate) fn assert_not_vector<const M: usize>() {
    const { assert!(M != 1, "operation is not available on vectors") }
}

#[inline(always)]
pub(crate) fn assert_square<const N: usize, const M: usize>() {
    const { assert!(N == M && M != 1, "operation requires a square matrix") }
}

#[inline(always)]
pub(crate) fn assert_min_dimension<const N: usize, const MIN: usize>() {
    const { assert!(N >= MIN, "dimension too small for this operation") }
}

/// `H` must be exactly one larger than `N`.
#[inline(always)]
pub(crate) fn assert_homogeneous<const N: usize, const H: usize>() {
    const { assert!(H == N + 1, "homogeneous dimension must be one larger") }
}
