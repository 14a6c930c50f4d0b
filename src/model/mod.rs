pub mod mlp;
pub mod neuron;
pub mod perceptron;

pub use mlp::{LayerSpec, Mlp};
pub use neuron::Neuron;
pub use perceptron::Perceptron;

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Hands out process-unique instance ids for units and models.
pub(crate) fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
