pub mod error;
pub mod validate;
pub mod activation;
pub mod loss;
pub mod model;
pub mod train;

// Convenience re-exports
pub use error::ModelError;
pub use activation::activation::Activation;
pub use loss::mse::MseLoss;
pub use model::perceptron::{Perceptron, DEFAULT_LEARNING_RATE};
pub use model::neuron::Neuron;
pub use model::mlp::{LayerSpec, Mlp};
pub use train::epoch_stats::EpochStats;
pub use train::observer::{ChannelObserver, LogObserver, TrainObserver};
