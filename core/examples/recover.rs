use math::big;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use recovery_core::dealer::{corrupt, Dealer};
use recovery_core::report::Recovery;
use recovery_core::{PointSet, RobustFitSearcher, SearchConfig};

const THRESHOLD: usize = 4;
const SHARES: usize = 9;
const CORRUPTED: &[usize] = &[1, 5];

/// Deal shares of a secret, tamper with a couple of them and show that the
/// robust search still recovers the secret and identifies the good shares.
fn main() {
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    let secret = big!(31_337).pow(7);
    let dealer = Dealer::new(secret.clone(), THRESHOLD, &mut rng)
        .expect("threshold is non-zero");

    let mut shares = dealer.deal(1..=SHARES as i64);
    corrupt(&mut shares, CORRUPTED, &mut rng);

    let set = PointSet::new(shares, THRESHOLD).expect("enough shares");
    let searcher =
        RobustFitSearcher::new(SearchConfig::default().with_parallel(true));
    let fit = searcher.search(&set).expect("search succeeds");

    let recovery = Recovery::new("demo", &set, fit);
    println!("{recovery}");

    assert_eq!(recovery.secret, secret, "recovered the dealt secret");
    assert_eq!(recovery.outliers(), CORRUPTED.len());
}
