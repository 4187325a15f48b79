//! Sequential processing of many instance files.
//!
//! Each file is loaded, validated and searched on its own. A failure is
//! logged against its file and the batch moves on to the next one.

use std::path::{Path, PathBuf};

use tracing::{error, info, instrument};

use crate::error::{RecoveryError, RecoveryResult};
use crate::instance::Instance;
use crate::params::SearchConfig;
use crate::report::Recovery;
use crate::search::RobustFitSearcher;

/// A file the batch could not recover a secret from.
#[derive(Debug)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub error: RecoveryError,
}

/// Tally of a finished batch.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub recovered: usize,
    pub failures: Vec<BatchFailure>,
}

impl BatchSummary {
    pub fn processed(&self) -> usize {
        self.recovered + self.failures.len()
    }

    pub fn all_recovered(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Recover the secret of an already loaded instance.
pub fn recover_instance(
    source: &str,
    instance: &Instance,
    searcher: &RobustFitSearcher,
) -> RecoveryResult<Recovery> {
    let set = instance.point_set()?;
    if let Some(x) = set.duplicate_x() {
        // the loader rejects these, but hand-built instances may not
        return Err(RecoveryError::malformed(format!(
            "x-coordinate {x} appears more than once"
        )));
    }

    let fit = searcher.search(&set)?;
    let recovery = Recovery::new(source, &set, fit);
    info!(
        source,
        k = recovery.threshold,
        n = recovery.total_points,
        inliers = recovery.inlier_count,
        tolerance = set.corruption_tolerance(),
        "recovered constant term"
    );
    Ok(recovery)
}

/// Load the instance at `path` and recover its secret.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn recover_file(
    path: &Path,
    searcher: &RobustFitSearcher,
) -> RecoveryResult<Recovery> {
    let instance = Instance::from_path(path)?;
    recover_instance(&path.display().to_string(), &instance, searcher)
}

/// Process every path in order, handing each recovery to `on_recovered` as
/// soon as it is available. Failures never stop the batch.
pub fn run_batch<P, F>(
    paths: impl IntoIterator<Item = P>,
    config: &SearchConfig,
    mut on_recovered: F,
) -> BatchSummary
where
    P: AsRef<Path>,
    F: FnMut(&Recovery),
{
    let searcher = RobustFitSearcher::new(*config);
    let mut summary = BatchSummary::default();

    for path in paths {
        let path = path.as_ref();
        match recover_file(path, &searcher) {
            Ok(recovery) => {
                on_recovered(&recovery);
                summary.recovered += 1;
            }
            Err(err) => {
                error!(path = %path.display(), "{err}");
                summary.failures.push(BatchFailure {
                    path: path.to_path_buf(),
                    error: err,
                });
            }
        }
    }

    summary
}
