//! Statistics Engine
//!
//! Descriptive statistics over the semiperiods of one run. Input is raw
//! milliseconds, output is in seconds. Variance is the population variance
//! (divided by the sample count).

/// Rejected input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatisticsError {
    /// No semiperiods were recorded
    Empty,
}

impl core::fmt::Display for StatisticsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatisticsError::Empty => f.write_str("No semiperiods recorded"),
        }
    }
}

/// Summary of a completed run, all values in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Statistics {
    /// Arithmetic mean (s)
    pub mean: f64,
    /// Population variance (s²)
    pub variance: f64,
    /// Square root of the variance (s)
    pub std_deviation: f64,
}

impl Statistics {
    /// Computes mean, variance and standard deviation of `samples_ms`
    ///
    /// # Errors
    /// [`StatisticsError::Empty`] for an empty slice, instead of dividing by zero.
    pub fn from_semiperiods(samples_ms: &[u32]) -> Result<Self, StatisticsError> {
        if samples_ms.is_empty() {
            return Err(StatisticsError::Empty);
        }
        let count = samples_ms.len() as f64;

        let sum_ms: f64 = samples_ms.iter().map(|&ms| f64::from(ms)).sum();
        let mean = sum_ms / (count * 1000.0);

        let squares: f64 = samples_ms
            .iter()
            .map(|&ms| {
                let delta = f64::from(ms) / 1000.0 - mean;
                delta * delta
            })
            .sum();
        let variance = squares / count;

        Ok(Self {
            mean,
            variance,
            std_deviation: libm::sqrt(variance),
        })
    }
}
