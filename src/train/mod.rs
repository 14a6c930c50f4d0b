pub mod epoch_stats;
pub mod observer;

pub use epoch_stats::EpochStats;
pub use observer::{ChannelObserver, LogObserver, TrainObserver};
