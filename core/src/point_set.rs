use std::collections::HashSet;

use math::point::Point;

use crate::error::{RecoveryError, RecoveryResult};
use crate::params::validate_threshold_config;
use crate::search::{FitResult, RobustFitSearcher};

/// The points of one problem instance together with its threshold `k`.
///
/// Built once and immutable afterwards. Construction enforces `n >= k >= 1`.
/// Duplicate x-coordinates are kept; the search reports them as a degenerate
/// basis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point>,
    threshold: usize,
}

impl PointSet {
    pub fn new(points: Vec<Point>, threshold: usize) -> RecoveryResult<Self> {
        if threshold == 0 {
            return Err(RecoveryError::InvalidThreshold(threshold));
        }
        if !validate_threshold_config(threshold, points.len()) {
            return Err(RecoveryError::InsufficientPoints {
                needed: threshold,
                found: points.len(),
            });
        }

        Ok(PointSet { points, threshold })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The declared threshold `k`.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// The observed number of points `n`.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Upper bound on how many shares may be corrupted while a unique
    /// best-supported fit can still exist.
    pub fn corruption_tolerance(&self) -> usize {
        self.len() - self.threshold
    }

    /// First x-coordinate that appears more than once, if any.
    pub fn duplicate_x(&self) -> Option<i64> {
        first_repeated_x(&self.points)
    }

    /// Run the robust fit search with the default configuration.
    pub fn best_fit(&self) -> RecoveryResult<FitResult> {
        RobustFitSearcher::default().search(self)
    }
}

/// First x-coordinate in `points` that was already seen earlier.
pub(crate) fn first_repeated_x(points: &[Point]) -> Option<i64> {
    let mut seen = HashSet::with_capacity(points.len());
    points.iter().map(|point| point.x).find(|x| !seen.insert(*x))
}
