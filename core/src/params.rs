use math::lagrange::DivisionMode;

/// Smallest usable threshold: a constant polynomial needs one point.
pub const MIN_THRESHOLD: usize = 1;

/// Check that `threshold` points can be drawn from `points` shares.
pub fn validate_threshold_config(threshold: usize, points: usize) -> bool {
    (MIN_THRESHOLD..=points).contains(&threshold)
}

/// Tunables for the robust fit search.
///
/// Parallelism and early exit never change the outcome, error or fit: the
/// search rejects repeated x-coordinates before enumerating. Exact division
/// can change the fit, since fractional values then stop counting as
/// inliers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchConfig {
    /// Score subsets on the rayon pool instead of the calling thread.
    pub parallel: bool,
    /// How the evaluator finishes each interpolation.
    pub division: DivisionMode,
    /// Stop at the first subset that reproduces every point.
    pub stop_on_full_support: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            parallel: false,
            division: DivisionMode::Truncating,
            stop_on_full_support: true,
        }
    }
}

impl SearchConfig {
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_division(mut self, division: DivisionMode) -> Self {
        self.division = division;
        self
    }

    pub fn with_stop_on_full_support(mut self, stop: bool) -> Self {
        self.stop_on_full_support = stop;
        self
    }

    /// Sequential, exhaustive, truncating: the reference configuration.
    pub fn exhaustive() -> Self {
        SearchConfig::default().with_stop_on_full_support(false)
    }
}
