use serde::{Deserialize, Serialize};

/// Per-epoch training statistics emitted during `fit`.
///
/// An "epoch" here is one processed sample/label pair within `fit`'s single
/// linear sweep, not a full pass over the dataset. One value is handed to
/// the configured observer after every (possible) parameter update.
/// Observers (a verbose logger, a progress chart) use this to report
/// training as it happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 0-based index of the sample/label pair within this `fit` call.
    pub epoch: usize,
    /// Raw model output for this sample, computed before any update.
    pub prediction: f64,
    /// Target label for this sample.
    pub target: f64,
    /// Mean squared error over the whole dataset, measured after the
    /// (possible) update of this epoch.
    pub loss: f64,
}
