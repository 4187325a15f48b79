use std::fs;
use std::path::{Path, PathBuf};

use math::lagrange::DivisionMode;
use math::{big, points};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use recovery_core::batch::{recover_file, run_batch};
use recovery_core::dealer::{corrupt, Dealer};
use recovery_core::{
    Instance, PointSet, RecoveryError, RobustFitSearcher, SearchConfig,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn searchers() -> Vec<RobustFitSearcher> {
    vec![
        RobustFitSearcher::default(),
        RobustFitSearcher::new(SearchConfig::exhaustive()),
        RobustFitSearcher::new(SearchConfig::default().with_parallel(true)),
        RobustFitSearcher::new(
            SearchConfig::default().with_division(DivisionMode::Exact),
        ),
    ]
}

#[test]
fn sample_instance_recovers_its_secret() {
    let recovery = recover_file(
        &fixture("sample.json"),
        &RobustFitSearcher::default(),
    )
    .expect("sample instance should recover");

    assert_eq!(recovery.secret, big!(3));
    assert_eq!(recovery.threshold, 3);
    assert_eq!(recovery.total_points, 4);
    assert_eq!(recovery.inlier_count, 4);
    assert_eq!(recovery.subset_xs, vec![1, 2, 3]);
}

#[test]
fn corrupted_share_is_outvoted() {
    for searcher in searchers() {
        let recovery = recover_file(&fixture("corrupted.json"), &searcher)
            .expect("corrupted instance should still recover");
        assert_eq!(recovery.secret, big!(2), "config {:?}", searcher.config());
        assert_eq!(recovery.inlier_count, 3);
        assert_eq!(recovery.outliers(), 1);
        assert_eq!(recovery.subset_xs, vec![1, 2, 3]);
    }
}

#[test]
fn malformed_digit_names_the_share() {
    let err = recover_file(
        &fixture("bad_digit.json"),
        &RobustFitSearcher::default(),
    )
    .unwrap_err();
    assert!(err.is_input_error());
    assert!(matches!(err, RecoveryError::MalformedShare { x: 1, .. }));
}

#[test]
fn batch_reports_every_file_and_keeps_going() {
    let files = [
        fixture("sample.json"),
        fixture("bad_digit.json"),
        fixture("missing.json"),
        fixture("corrupted.json"),
    ];

    let mut secrets = Vec::new();
    let summary = run_batch(&files, &SearchConfig::default(), |recovery| {
        secrets.push(recovery.secret.clone());
    });

    assert_eq!(secrets, vec![big!(3), big!(2)]);
    assert_eq!(summary.recovered, 2);
    assert_eq!(summary.processed(), 4);
    let failed: Vec<&Path> =
        summary.failures.iter().map(|f| f.path.as_path()).collect();
    assert_eq!(failed, vec![files[1].as_path(), files[2].as_path()]);
}

#[test]
fn dealt_instances_survive_a_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let mut paths = Vec::new();
    let mut expected = Vec::new();

    for (i, base) in [2u32, 10, 16, 36].into_iter().enumerate() {
        let secret = big!(10).pow(40) + i;
        let dealer = Dealer::new(secret.clone(), 3, &mut rng).unwrap();
        let instance = dealer.deal_instance(6);
        let path = dir.path().join(format!("instance-{i}.json"));
        fs::write(
            &path,
            serde_json::to_string_pretty(
                &instance.to_json_value(base).unwrap(),
            )
            .unwrap(),
        )
        .unwrap();

        let reloaded = Instance::from_path(&path).unwrap();
        assert_eq!(reloaded.points(), instance.points());
        assert_eq!(reloaded.declared_count(), Some(6));

        paths.push(path);
        expected.push(secret);
    }

    let mut secrets = Vec::new();
    let summary = run_batch(&paths, &SearchConfig::default(), |recovery| {
        assert_eq!(recovery.inlier_count, 6);
        secrets.push(recovery.secret.clone());
    });
    assert!(summary.all_recovered());
    assert_eq!(secrets, expected);
}

#[test]
fn tolerates_corruption_below_the_majority_bound() {
    // with n = 7 and k = 3 the honest shares outvote up to two bad ones
    let config = SearchConfig::default().with_division(DivisionMode::Exact);
    for seed in 0..8u64 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let dealer = Dealer::new(big!(seed * 1_000 + 17), 3, &mut rng).unwrap();
        let mut shares = dealer.deal(1..=7);
        let first = (seed % 7) as usize;
        let second = ((seed + 3) % 7) as usize;
        corrupt(&mut shares, &[first, second], &mut rng);

        let set = PointSet::new(shares, 3).unwrap();
        for parallel in [false, true] {
            let fit = RobustFitSearcher::new(config.with_parallel(parallel))
                .search(&set)
                .unwrap();
            assert_eq!(fit.constant_term, dealer.secret(), "seed {seed}");
            assert_eq!(fit.inlier_count, 5, "seed {seed}");
            assert!(!fit.subset.contains(&first));
            assert!(!fit.subset.contains(&second));
        }
    }
}

#[test]
fn every_threshold_up_to_n_recovers_an_honest_instance() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xdead);
    for k in 1..=6 {
        let dealer = Dealer::new(big!(-42), k, &mut rng).unwrap();
        let set = PointSet::new(dealer.deal(-3..=2), k).unwrap();
        let fit = set.best_fit().unwrap();
        assert_eq!(fit.constant_term, big!(-42), "k = {k}");
        assert_eq!(fit.inlier_count, 6);
        // the first subset already explains every share
        assert_eq!(fit.subset, (0..k).collect::<Vec<_>>());
    }
}

#[test]
fn repeated_x_in_a_point_set_is_degenerate() {
    let set = PointSet::new(points![(1, 5), (1, 6), (2, 8)], 2).unwrap();
    assert!(matches!(
        set.best_fit(),
        Err(RecoveryError::Interpolation(_))
    ));
}
