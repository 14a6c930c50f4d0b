use serde::{Deserialize, Serialize};

use crate::activation::Activation;
use crate::model::next_id;

/// Describes one layer in a multi-layer model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Number of neurons in this layer.
    pub size: usize,
    /// Number of values feeding into this layer: the previous layer's size,
    /// or the raw input dimension for the first layer.
    pub input_size: usize,
    /// Activation function applied after the linear transform.
    pub activation: Activation,
}

/// A multi-layer composite model: an ordered stack of layer descriptions.
///
/// Construction-only for now: the composite holds its architecture and an
/// instance id, and deliberately has no forward or training behavior. It
/// exists so multi-layer experiments have a place to grow from the same
/// building blocks the single unit uses.
#[derive(Debug)]
pub struct Mlp {
    id: u64,
    layers: Vec<LayerSpec>,
}

impl Mlp {
    /// Builds the composite from ordered layer descriptions.
    pub fn new(layers: Vec<LayerSpec>) -> Mlp {
        Mlp {
            id: next_id(),
            layers,
        }
    }

    /// Opaque instance id, unique per constructed composite.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The ordered layer descriptions, input end first.
    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_keeps_layer_order() {
        let specs = vec![
            LayerSpec {
                size: 4,
                input_size: 2,
                activation: Activation::Sigmoid,
            },
            LayerSpec {
                size: 1,
                input_size: 4,
                activation: Activation::Step,
            },
        ];
        let mlp = Mlp::new(specs.clone());
        assert_eq!(mlp.layers(), &specs[..]);
    }

    #[test]
    fn test_composites_get_their_own_ids() {
        let a = Mlp::new(Vec::new());
        let b = Mlp::new(Vec::new());
        assert_ne!(a.id(), b.id());
    }
}
