use num_traits::Float;

/// Converts a sequence length into the float domain.
///
/// A length outside the representable range degrades to NaN, which then
/// propagates through the arithmetic like every other numeric degeneracy.
///
/// # Arguments
///
/// * `len` - The sequence length
///
/// # Returns
///
/// * `T` - The length as a float, or NaN if not representable
#[inline]
pub fn cast_len<T: Float>(len: usize) -> T {
    T::from(len).unwrap_or_else(T::nan)
}
