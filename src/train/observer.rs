use std::sync::mpsc;

use tracing::info;

use crate::train::epoch_stats::EpochStats;

/// Observer invoked once per training epoch.
///
/// The training loop owns the algorithm; everything about reporting lives
/// behind this trait. Implementations are called synchronously and should
/// return quickly.
pub trait TrainObserver {
    fn on_step(&mut self, stats: &EpochStats);
}

/// Emits one human-readable line per epoch through the `tracing` facade.
///
/// This is what `fit`'s `verbose` flag wires in. Hosts that want the lines
/// on a terminal install a subscriber (see the demos).
#[derive(Debug, Default)]
pub struct LogObserver;

impl TrainObserver for LogObserver {
    fn on_step(&mut self, stats: &EpochStats) {
        info!(
            "epoch {}: prediction = {}, target = {}, loss = {}",
            stats.epoch, stats.prediction, stats.target, stats.loss
        );
    }
}

/// Forwards every `EpochStats` over an mpsc channel.
///
/// Useful for driving charts or progress indicators from another thread.
/// A dropped receiver is ignored: training carries on, the stats go
/// nowhere.
pub struct ChannelObserver {
    tx: mpsc::Sender<EpochStats>,
}

impl ChannelObserver {
    pub fn new(tx: mpsc::Sender<EpochStats>) -> Self {
        ChannelObserver { tx }
    }
}

impl TrainObserver for ChannelObserver {
    fn on_step(&mut self, stats: &EpochStats) {
        let _ = self.tx.send(stats.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(epoch: usize) -> EpochStats {
        EpochStats {
            epoch,
            prediction: 1.0,
            target: 0.0,
            loss: 0.25,
        }
    }

    #[test]
    fn test_channel_observer_forwards_stats_in_order() {
        let (tx, rx) = mpsc::channel();
        let mut observer = ChannelObserver::new(tx);

        observer.on_step(&stats(0));
        observer.on_step(&stats(1));
        drop(observer);

        let received: Vec<EpochStats> = rx.iter().collect();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].epoch, 0);
        assert_eq!(received[1].epoch, 1);
    }

    #[test]
    fn test_channel_observer_survives_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        let mut observer = ChannelObserver::new(tx);
        drop(rx);

        // Must not panic; the send error is swallowed.
        observer.on_step(&stats(0));
    }
}
