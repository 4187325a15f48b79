//! Outlier-robust secret recovery.
//!
//! Every size-k subset of the shares defines a candidate polynomial. Each
//! candidate is scored by how many of the n shares it reproduces exactly, and
//! the constant term of the best-supported candidate is reported. Ties go to
//! the subset enumerated first, so the outcome is a pure function of the
//! input order.
//!
//! A repeated x-coordinate is rejected before anything is enumerated once
//! `k >= 2`, since some subset would then hold both copies. Every
//! configuration therefore reports the same error for the same input.

use std::cmp::Ordering;

use math::error::InterpolationError;
use math::lagrange::{DivisionMode, LagrangeBasis};
use math::point::Point;
use num_bigint::BigInt;
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::combinations::{binomial, Combinations};
use crate::error::{RecoveryError, RecoveryResult};
use crate::params::{validate_threshold_config, SearchConfig};
use crate::point_set::{first_repeated_x, PointSet};

/// Outcome of the search: the winning subset, its support and its secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FitResult {
    /// Indices into the searched points, strictly increasing.
    pub subset: Vec<usize>,
    /// How many of the searched points lie on the subset's polynomial.
    pub inlier_count: usize,
    /// The polynomial's value at `x = 0`.
    pub constant_term: BigInt,
}

impl FitResult {
    /// The points the winning polynomial was interpolated through.
    pub fn subset_points<'a>(
        &'a self,
        points: &'a [Point],
    ) -> impl Iterator<Item = &'a Point> + 'a {
        self.subset.iter().filter_map(move |&i| points.get(i))
    }

    /// Shares that disagree with the winning polynomial.
    pub fn outlier_count(&self, total: usize) -> usize {
        total.saturating_sub(self.inlier_count)
    }
}

/// A scored subset whose constant term has not been computed yet.
struct Candidate {
    subset: Vec<usize>,
    inlier_count: usize,
    basis: LagrangeBasis,
}

impl Candidate {
    /// Higher support wins; equal support goes to the lexicographically
    /// smaller subset, which is the one enumerated first.
    fn prefer(self, other: Candidate) -> Candidate {
        match self.inlier_count.cmp(&other.inlier_count) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal if self.subset <= other.subset => self,
            Ordering::Equal => other,
        }
    }

    fn finish(self, mode: DivisionMode) -> RecoveryResult<FitResult> {
        let constant_term = self.basis.constant_term(mode)?;
        Ok(FitResult {
            subset: self.subset,
            inlier_count: self.inlier_count,
            constant_term,
        })
    }
}

/// Exhaustive robust fit search over all `C(n, k)` subsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RobustFitSearcher {
    config: SearchConfig,
}

impl RobustFitSearcher {
    pub fn new(config: SearchConfig) -> Self {
        RobustFitSearcher { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search a validated point set using its declared threshold.
    pub fn search(&self, set: &PointSet) -> RecoveryResult<FitResult> {
        self.find_best_fit(set.points(), set.threshold())
    }

    /// Find the size-`k` subset of `points` whose interpolating polynomial
    /// reproduces the most points, and return that polynomial's constant
    /// term.
    ///
    /// Fails with [`RecoveryError::InsufficientPoints`] before enumerating
    /// anything when `points.len() < k`, and with
    /// [`InterpolationError::DegenerateBasis`] naming the first repeated
    /// x-coordinate when `k >= 2`.
    #[instrument(level = "debug", skip_all, fields(n = points.len(), k = k))]
    pub fn find_best_fit(
        &self,
        points: &[Point],
        k: usize,
    ) -> RecoveryResult<FitResult> {
        ensure_searchable(points.len(), k)?;
        if k >= 2 {
            if let Some(x) = first_repeated_x(points) {
                return Err(InterpolationError::DegenerateBasis { x }.into());
            }
        }
        debug!(
            subsets = ?binomial(points.len(), k),
            parallel = self.config.parallel,
            "starting robust fit search"
        );

        let best = if self.config.parallel {
            self.search_parallel(points, k)?
        } else {
            self.search_sequential(points, k)?
        };

        let result = best.finish(self.config.division)?;
        debug!(
            subset = ?result.subset,
            inliers = result.inlier_count,
            "best fit selected"
        );
        Ok(result)
    }

    fn search_sequential(
        &self,
        points: &[Point],
        k: usize,
    ) -> RecoveryResult<Candidate> {
        let mut best: Option<Candidate> = None;

        for subset in Combinations::new(points.len(), k) {
            let candidate = self.score(points, subset)?;
            let improves = best
                .as_ref()
                .map_or(true, |b| candidate.inlier_count > b.inlier_count);
            if !improves {
                continue;
            }

            debug!(
                subset = ?candidate.subset,
                inliers = candidate.inlier_count,
                "new best candidate"
            );
            let unanimous = candidate.inlier_count == points.len();
            best = Some(candidate);

            // x-coordinates are distinct here, so every later subset scores
            // without error and none can beat full support
            if unanimous && self.config.stop_on_full_support {
                break;
            }
        }

        best.ok_or(RecoveryError::InsufficientPoints {
            needed: k,
            found: points.len(),
        })
    }

    fn search_parallel(
        &self,
        points: &[Point],
        k: usize,
    ) -> RecoveryResult<Candidate> {
        Combinations::new(points.len(), k)
            .par_bridge()
            .map(|subset| self.score(points, subset))
            .try_reduce_with(|a, b| Ok(a.prefer(b)))
            .unwrap_or(Err(RecoveryError::InsufficientPoints {
                needed: k,
                found: points.len(),
            }))
    }

    /// Interpolate through `subset` and count the points it reproduces.
    fn score(
        &self,
        points: &[Point],
        subset: Vec<usize>,
    ) -> RecoveryResult<Candidate> {
        let samples: Vec<&Point> = subset.iter().map(|&i| &points[i]).collect();
        let basis = LagrangeBasis::new(&samples)?;
        let inlier_count =
            count_inliers(&basis, points, self.config.division)?;
        trace!(?subset, inlier_count, "scored subset");

        Ok(Candidate {
            subset,
            inlier_count,
            basis,
        })
    }
}

/// Count how many of `points` lie exactly on the polynomial of `basis`.
///
/// Under [`DivisionMode::Exact`] a point where the polynomial takes a
/// non-integer value is simply not an inlier.
pub fn count_inliers(
    basis: &LagrangeBasis,
    points: &[Point],
    mode: DivisionMode,
) -> RecoveryResult<usize> {
    points.iter().try_fold(0usize, |count, point| {
        match basis.evaluate_with(point.x, mode) {
            Ok(value) if value == point.y => Ok(count + 1),
            Ok(_) | Err(InterpolationError::InexactResult { .. }) => Ok(count),
            Err(err) => Err(err.into()),
        }
    })
}

fn ensure_searchable(n: usize, k: usize) -> RecoveryResult<()> {
    if k == 0 {
        return Err(RecoveryError::InvalidThreshold(k));
    }
    if !validate_threshold_config(k, n) {
        return Err(RecoveryError::InsufficientPoints {
            needed: k,
            found: n,
        });
    }
    Ok(())
}

/// Run the search with the default configuration.
pub fn find_best_fit(points: &[Point], k: usize) -> RecoveryResult<FitResult> {
    RobustFitSearcher::default().find_best_fit(points, k)
}
