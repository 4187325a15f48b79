use std::fmt;

use num_bigint::BigInt;

use crate::point_set::PointSet;
use crate::search::FitResult;

/// What gets printed for one successfully processed instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recovery {
    pub source: String,
    pub threshold: usize,
    pub total_points: usize,
    pub inlier_count: usize,
    pub subset_xs: Vec<i64>,
    pub secret: BigInt,
}

impl Recovery {
    pub fn new(
        source: impl Into<String>,
        set: &PointSet,
        fit: FitResult,
    ) -> Self {
        let subset_xs =
            fit.subset_points(set.points()).map(|p| p.x).collect();
        Recovery {
            source: source.into(),
            threshold: set.threshold(),
            total_points: set.len(),
            inlier_count: fit.inlier_count,
            subset_xs,
            secret: fit.constant_term,
        }
    }

    /// Shares that do not lie on the recovered polynomial.
    pub fn outliers(&self) -> usize {
        self.total_points.saturating_sub(self.inlier_count)
    }
}

impl fmt::Display for Recovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== {} =====", self.source)?;
        writeln!(
            f,
            "threshold k = {}, points n = {}",
            self.threshold, self.total_points
        )?;
        writeln!(
            f,
            "matched {} of {} points using x = {:?}",
            self.inlier_count, self.total_points, self.subset_xs
        )?;
        write!(f, "constant term P(0) = {}", self.secret)
    }
}
