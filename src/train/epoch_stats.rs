use std::fmt;

use serde::{Serialize, Deserialize};

/// Per-epoch training statistics emitted by `train_loop`.
///
/// Every completed epoch yields one value; it is also sent on
/// `TrainConfig::progress_tx` when a channel is configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 0-based epoch index, as printed in the progress line.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Sum of per-sample BCE losses over the epoch.
    pub total_loss: f64,
    /// `total_loss` divided by the number of samples.
    pub mean_loss: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

/// The per-epoch progress line, `Epoch: <i> Loss: <total>`.
impl fmt::Display for EpochStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Epoch: {} Loss: {}", self.epoch, self.total_loss)
    }
}
