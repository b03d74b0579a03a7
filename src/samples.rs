use core::fmt;

use num_traits::Float;

use crate::{InvalidArgument, covariance, mean, pearson_coefficient, variance};

/// A pair of observation sequences held for repeated statistical queries.
///
/// `Samples<T>` borrows the two sequences as-is: nothing is copied, nothing
/// is validated at construction, and the data is never mutated. Equal length
/// is required only by the pairwise queries, which is where it is checked.
///
/// # Examples
///
/// ```
/// # use bivariate_statistics::Samples;
/// let samples = Samples::new(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 5.0, 4.0, 5.0]);
/// let description = samples.description()?;
///
/// assert_eq!(description.x_mean, 3.0);
/// assert_eq!(description.y_mean, 4.0);
/// assert_eq!(description.covariance, 6.0);
/// # Ok::<(), bivariate_statistics::InvalidArgument>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Samples<'a, T> {
    /// The x observations
    x: &'a [T],
    /// The y observations
    y: &'a [T],
}

impl<'a, T> Samples<'a, T>
where
    T: Default + Clone + Float,
{
    /// Creates a new `Samples` instance borrowing the two sequences.
    ///
    /// # Arguments
    ///
    /// * `x` - The x observations
    /// * `y` - The y observations
    ///
    /// # Returns
    ///
    /// * `Self` - The sample pair
    pub const fn new(x: &'a [T], y: &'a [T]) -> Self {
        Self { x, y }
    }

    /// Returns the x observations.
    ///
    /// # Returns
    ///
    /// * `&[T]` - The x observations
    pub const fn x(&self) -> &[T] {
        self.x
    }

    /// Returns the y observations.
    ///
    /// # Returns
    ///
    /// * `&[T]` - The y observations
    pub const fn y(&self) -> &[T] {
        self.y
    }

    /// Computes the full description of the sample pair.
    ///
    /// Each mean is computed once and reused for the covariance and both
    /// deviation sums. The returned [`Description`] renders as a
    /// human-readable report through [`core::fmt::Display`], so the caller
    /// decides where the report goes; the library itself performs no I/O.
    ///
    /// # Returns
    ///
    /// * `Result<Description<T>, InvalidArgument>` - The description, or
    ///   [`InvalidArgument::LengthMismatch`] if the sequences differ in length
    pub fn description(&self) -> Result<Description<T>, InvalidArgument> {
        let x_mean = mean(self.x);
        let y_mean = mean(self.y);

        Ok(Description {
            x_mean,
            y_mean,
            covariance: covariance(self.x, self.y, Some(x_mean), Some(y_mean))?,
            x_variance: variance(self.x, Some(x_mean)),
            y_variance: variance(self.y, Some(y_mean)),
            pearson_coefficient: pearson_coefficient(self.x, self.y)?,
        })
    }
}

/// The descriptive statistics of a sample pair.
///
/// Produced by [`Samples::description`]. The `Display` implementation emits
/// the report line by line, one labelled statistic per line, ready to hand
/// to any `core::fmt::Write` sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Description<T> {
    /// Mean of the x observations
    pub x_mean: T,
    /// Mean of the y observations
    pub y_mean: T,
    /// Cross-deviation sum of x and y
    pub covariance: T,
    /// Squared-deviation sum of the x observations
    pub x_variance: T,
    /// Squared-deviation sum of the y observations
    pub y_variance: T,
    /// Pearson correlation coefficient (r)
    pub pearson_coefficient: T,
}

impl<T> fmt::Display for Description<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "x mean:     {}", self.x_mean)?;
        writeln!(f, "y mean:     {}", self.y_mean)?;
        writeln!(f, "covariance: {}", self.covariance)?;
        writeln!(f, "x variance: {}", self.x_variance)?;
        writeln!(f, "y variance: {}", self.y_variance)?;
        write!(f, "r:          {}", self.pearson_coefficient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_description_end_to_end() {
        let samples = Samples::new(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 5.0, 4.0, 5.0]);
        let description = samples.description().unwrap();

        assert_eq!(description.x_mean, 3.0);
        assert_eq!(description.y_mean, 4.0);
        assert_eq!(description.covariance, 6.0);
        assert_eq!(description.x_variance, 10.0);
        assert_eq!(description.y_variance, 6.0);
        assert_approx_eq!(description.pearson_coefficient, 0.7746, 0.0001);
    }

    #[test]
    fn test_description_rejects_mismatched_lengths() {
        let samples = Samples::new(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
        assert_eq!(
            samples.description(),
            Err(InvalidArgument::LengthMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_report_labels_every_statistic() {
        let samples = Samples::new(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 5.0, 4.0, 5.0]);
        let report = samples.description().unwrap().to_string();

        assert!(report.contains("x mean:     3"));
        assert!(report.contains("y mean:     4"));
        assert!(report.contains("covariance: 6"));
        assert!(report.contains("x variance: 10"));
        assert!(report.contains("y variance: 6"));
        assert!(report.contains("r:          0.77"));
    }
}
