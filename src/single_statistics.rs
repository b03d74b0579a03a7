use num_traits::Float;

use crate::{Kbn, helper::cast_len};

/// Returns the arithmetic mean of a sequence.
///
/// The sum is accumulated with Kahan-Babuška-Neumaier compensated summation,
/// so the result stays accurate even when the elements differ widely in
/// magnitude.
///
/// The mean of an empty sequence divides zero by zero and is NaN; callers
/// needing a stricter guarantee must check for emptiness themselves.
///
/// # Arguments
///
/// * `seq` - The sequence of values
///
/// # Returns
///
/// * `T` - The arithmetic mean of the sequence
///
/// # Examples
///
/// ```
/// # use bivariate_statistics::mean;
/// let m: f64 = mean(&[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(m, 2.5);
///
/// assert!(mean::<f64>(&[]).is_nan());
/// ```
pub fn mean<T>(seq: &[T]) -> T
where
    T: Default + Clone + Float,
{
    let mut sum = Kbn::<T>::default();
    for &value in seq {
        sum += value;
    }
    sum.total() / cast_len(seq.len())
}

/// Returns the sum of squared deviations from the mean, Σ(vᵢ − mean)².
///
/// This is the raw deviation sum, not divided by N or N−1. The same
/// convention holds for [`covariance`](crate::covariance), and the matching
/// scale is what lets the N-factors cancel in
/// [`pearson_coefficient`](crate::pearson_coefficient). Normalize the result
/// yourself if you need the per-element moment.
///
/// When `mean` is `None` it is recomputed via [`mean`]; a supplied mean is
/// used as-is, including a legitimate zero.
///
/// # Arguments
///
/// * `seq` - The sequence of values
/// * `mean` - The precomputed mean of the sequence, or `None` to recompute it
///
/// # Returns
///
/// * `T` - The sum of squared deviations from the mean
///
/// # Examples
///
/// ```
/// # use bivariate_statistics::variance;
/// assert_eq!(variance(&[1.0, 2.0, 3.0], Some(2.0)), 2.0);
/// assert_eq!(variance(&[1.0, 2.0, 3.0], None), 2.0);
/// ```
pub fn variance<T>(seq: &[T], mean: Option<T>) -> T
where
    T: Default + Clone + Float,
{
    let mean = mean.unwrap_or_else(|| crate::mean(seq));
    let mut sum = Kbn::<T>::default();
    for &value in seq {
        let deviation = value - mean;
        sum += deviation * deviation;
    }
    sum.total()
}
