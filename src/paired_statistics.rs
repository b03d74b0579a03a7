use num_traits::Float;

use crate::{InvalidArgument, Kbn, mean, variance};

/// Returns the sum of cross-deviation products, Σ(aᵢ − ā)(bᵢ − b̄).
///
/// Like [`variance`], this is the raw deviation sum with no division by N,
/// keeping both second moments on the same scale. The sum is accumulated
/// with Kahan-Babuška-Neumaier compensated summation.
///
/// Means are recomputed via [`mean`] whenever the supplied value is `None`;
/// a supplied mean is used as-is, including a legitimate zero.
///
/// # Arguments
///
/// * `a` - The first sequence
/// * `b` - The second sequence
/// * `a_mean` - The precomputed mean of `a`, or `None` to recompute it
/// * `b_mean` - The precomputed mean of `b`, or `None` to recompute it
///
/// # Returns
///
/// * `Result<T, InvalidArgument>` - The cross-deviation sum, or
///   [`InvalidArgument::LengthMismatch`] if the sequences differ in length
///
/// # Examples
///
/// ```
/// # use bivariate_statistics::covariance;
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [2.0, 4.0, 5.0, 4.0, 5.0];
///
/// assert_eq!(covariance(&x, &y, None, None)?, 6.0);
/// assert_eq!(covariance(&x, &y, Some(3.0), Some(4.0))?, 6.0);
///
/// assert!(covariance(&x[..2], &y, None, None).is_err());
/// # Ok::<(), bivariate_statistics::InvalidArgument>(())
/// ```
pub fn covariance<T>(
    a: &[T],
    b: &[T],
    a_mean: Option<T>,
    b_mean: Option<T>,
) -> Result<T, InvalidArgument>
where
    T: Default + Clone + Float,
{
    if a.len() != b.len() {
        return Err(InvalidArgument::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let a_mean = a_mean.unwrap_or_else(|| mean(a));
    let b_mean = b_mean.unwrap_or_else(|| mean(b));

    let mut sum = Kbn::<T>::default();
    for (&x, &y) in a.iter().zip(b) {
        sum += (x - a_mean) * (y - b_mean);
    }
    Ok(sum.total())
}

/// Returns the Pearson correlation coefficient (r) between two sequences.
///
/// Both means are computed once and shared between the covariance and the
/// two deviation sums, then r = cov / √(varₐ · var_b). Because the
/// intermediate sums all omit the division by N, the N-factors cancel and
/// the result equals the textbook Pearson r in [−1, 1].
///
/// A constant sequence has a zero deviation sum, so the division yields a
/// non-finite result. That is propagated rather than special-cased; callers
/// needing a finite r must rule out constant inputs themselves.
///
/// # Arguments
///
/// * `a` - The first sequence
/// * `b` - The second sequence
///
/// # Returns
///
/// * `Result<T, InvalidArgument>` - The correlation coefficient, or
///   [`InvalidArgument::LengthMismatch`] if the sequences differ in length
///
/// # Examples
///
/// ```
/// # use bivariate_statistics::pearson_coefficient;
/// # use assert_approx_eq::assert_approx_eq;
/// let x = [1.0f64, 2.0, 3.0, 4.0, 5.0];
/// let y = [2.0f64, 4.0, 5.0, 4.0, 5.0];
///
/// assert_approx_eq!(pearson_coefficient(&x, &y)?, 0.7746, 0.0001);
///
/// // Perfect inverse relationship.
/// assert_approx_eq!(pearson_coefficient(&[1.0f64, 2.0, 3.0], &[6.0, 5.0, 4.0])?, -1.0);
/// # Ok::<(), bivariate_statistics::InvalidArgument>(())
/// ```
pub fn pearson_coefficient<T>(a: &[T], b: &[T]) -> Result<T, InvalidArgument>
where
    T: Default + Clone + Float,
{
    let a_mean = mean(a);
    let b_mean = mean(b);

    let cov = covariance(a, b, Some(a_mean), Some(b_mean))?;
    let variance_product = variance(a, Some(a_mean)) * variance(b, Some(b_mean));

    Ok(cov / variance_product.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_covariance_of_self_equals_variance() {
        let x = [2.0, 4.0, 5.0, 4.0, 5.0];
        assert_eq!(covariance(&x, &x, None, None), Ok(variance(&x, None)));
    }

    #[test]
    fn test_covariance_rejects_mismatched_lengths() {
        assert_eq!(
            covariance(&[1.0, 2.0], &[1.0, 2.0, 3.0], None, None),
            Err(InvalidArgument::LengthMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_covariance_with_precomputed_means() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 5.0, 4.0, 5.0];
        assert_eq!(covariance(&x, &y, Some(3.0), Some(4.0)), Ok(6.0));
        assert_eq!(covariance(&x, &y, None, None), Ok(6.0));
    }

    #[test]
    fn test_pearson_of_self_is_one() {
        let x = [1.2, -0.7, 3.4, 2.1, -1.5];
        assert_approx_eq!(pearson_coefficient(&x, &x).unwrap(), 1.0);
    }

    #[test]
    fn test_pearson_of_perfect_inverse_is_minus_one() {
        let r = pearson_coefficient(&[1.0, 2.0, 3.0], &[6.0, 5.0, 4.0]).unwrap();
        assert_approx_eq!(r, -1.0);
    }

    #[test]
    fn test_pearson_is_symmetric() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 5.0, 4.0, 5.0];
        assert_eq!(pearson_coefficient(&x, &y), pearson_coefficient(&y, &x));
    }

    #[test]
    fn test_pearson_of_constant_sequence_is_not_finite() {
        let r = pearson_coefficient(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).unwrap();
        assert!(!r.is_finite());
    }

    #[test]
    fn test_pearson_rejects_mismatched_lengths() {
        assert_eq!(
            pearson_coefficient(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(InvalidArgument::LengthMismatch { left: 2, right: 3 })
        );
    }
}
