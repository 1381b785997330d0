//! Per-step statistics across percolation trials.
//!
//! Each trial reports one value per occupation step (the largest cluster
//! size seen so far). [`StepStatistics`] keeps a running sum and sum of
//! squares per step, and [`StepStatistics::finalize`] reduces them to the
//! mean and its standard error.
//!
//! # Formulas
//!
//! With `T` trials and per-step sums `S₁`, `S₂`:
//!
//! ```text
//! mean     = S₁ / T
//! variance = S₂ / T − mean²
//! stderr   = √(variance / (T − 1))
//! ```
//!
//! Cluster sizes are integers, so both sums stay exact in `f64` while
//! `N² · T < 2⁵³` (`N` nodes, `T` trials); within that bound the only
//! rounding happens in the final division.

/// Finalised statistics for one occupation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummary {
    /// Number of occupied nodes, `1..=n`.
    pub step: usize,
    /// Occupation fraction `step / n`, in `(0, 1]`.
    pub fraction: f64,
    /// Mean largest-cluster size, in nodes.
    pub mean: f64,
    /// Standard error of `mean`, in nodes.
    pub std_error: f64,
}

/// Running sum and sum of squares per occupation step.
///
/// # Examples
/// ```
/// use u_percolation::stats::StepStatistics;
///
/// let mut stats = StepStatistics::new(2);
/// stats.record_trial(&[1, 2]);
/// stats.record_trial(&[1, 1]);
/// let table = stats.finalize().unwrap();
/// assert_eq!(table[1].mean, 1.5);
/// assert_eq!(table[1].std_error, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StepStatistics {
    sum: Vec<f64>,
    sum_sq: Vec<f64>,
    trials: u64,
}

impl StepStatistics {
    /// Creates an empty accumulator for `steps` occupation steps.
    pub fn new(steps: usize) -> Self {
        Self {
            sum: vec![0.0; steps],
            sum_sq: vec![0.0; steps],
            trials: 0,
        }
    }

    /// Number of occupation steps.
    pub fn steps(&self) -> usize {
        self.sum.len()
    }

    /// Number of trials recorded so far.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Adds one trial's per-step values.
    ///
    /// # Panics
    /// Panics if `values.len() != steps()`.
    pub fn record_trial(&mut self, values: &[usize]) {
        assert_eq!(
            values.len(),
            self.steps(),
            "trial length does not match the number of steps"
        );
        for ((s1, s2), &v) in self.sum.iter_mut().zip(&mut self.sum_sq).zip(values) {
            let v = v as f64;
            *s1 += v;
            *s2 += v * v;
        }
        self.trials += 1;
    }

    /// Reduces the sums to one [`StepSummary`] per step.
    ///
    /// A variance that comes out marginally negative from rounding is
    /// clamped to zero.
    ///
    /// # Returns
    /// - `None` if fewer than 2 trials were recorded.
    pub fn finalize(&self) -> Option<Vec<StepSummary>> {
        if self.trials < 2 {
            return None;
        }
        let t = self.trials as f64;
        let n = self.steps() as f64;
        let table = self
            .sum
            .iter()
            .zip(&self.sum_sq)
            .enumerate()
            .map(|(i, (&s1, &s2))| {
                let mean = s1 / t;
                let variance = (s2 / t - mean * mean).max(0.0);
                StepSummary {
                    step: i + 1,
                    fraction: (i + 1) as f64 / n,
                    mean,
                    std_error: (variance / (t - 1.0)).sqrt(),
                }
            })
            .collect();
        Some(table)
    }
}
