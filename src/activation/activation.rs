use serde::{Deserialize, Serialize};
use std::f64::consts::E;

/// Unary activation functions applied to a unit's weighted sum.
///
/// Every variant has a registry name (see [`Activation::from_name`] and
/// [`Activation::name`]); the serialized form uses the same names, so a
/// spelling that works in one place works everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    /// Threshold at zero: `1.0` when `x >= 0.0`, else `0.0`.
    Step,
    Sigmoid,
    Relu,
    Tanh,
    Identity,
}

impl Activation {
    /// Applies the activation to a single pre-activation value.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            Activation::Step => {
                if x >= 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            Activation::Relu => {
                if x > 0.0 {
                    x
                } else {
                    0.0
                }
            }
            Activation::Tanh => x.tanh(),
            Activation::Identity => x,
        }
    }

    /// Looks an activation up by its registry name.
    pub fn from_name(name: &str) -> Option<Activation> {
        match name {
            "step" => Some(Activation::Step),
            "sigmoid" => Some(Activation::Sigmoid),
            "relu" => Some(Activation::Relu),
            "tanh" => Some(Activation::Tanh),
            "identity" => Some(Activation::Identity),
            _ => None,
        }
    }

    /// The registry name this variant is looked up by.
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Step => "step",
            Activation::Sigmoid => "sigmoid",
            Activation::Relu => "relu",
            Activation::Tanh => "tanh",
            Activation::Identity => "identity",
        }
    }
}

/// New units bind the step function unless told otherwise.
impl Default for Activation {
    fn default() -> Self {
        Activation::Step
    }
}
