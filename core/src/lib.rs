pub mod batch;
pub mod combinations;
pub mod dealer;
pub mod error;
pub mod instance;
pub mod params;
pub mod point_set;
pub mod report;
pub mod search;

pub use error::{RecoveryError, RecoveryResult};
pub use instance::Instance;
pub use params::SearchConfig;
pub use point_set::PointSet;
pub use search::{find_best_fit, FitResult, RobustFitSearcher};
