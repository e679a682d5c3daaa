//! Pointwise activation selection
//!
//! The dense-stack builder takes its nonlinearities as configuration values
//! rather than function pointers, so activations are modeled as an enum that
//! dispatches to Burn's pointwise activation functions. `Identity` stands in
//! for "no nonlinearity" on linear output heads.

use burn::tensor::{
    activation::{relu, sigmoid, tanh},
    backend::Backend,
    Tensor,
};
use serde::{Deserialize, Serialize};

/// A pointwise nonlinearity applied after an affine transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// Rectifier: negative inputs clamp to zero, positive pass unchanged
    Relu,
    /// Hyperbolic tangent: output bounded in (-1, 1)
    Tanh,
    /// Logistic function: output bounded in (0, 1)
    Sigmoid,
    /// No nonlinearity
    Identity,
}

impl Activation {
    /// Apply this activation pointwise to a tensor of any rank
    pub fn apply<B: Backend, const D: usize>(self, tensor: Tensor<B, D>) -> Tensor<B, D> {
        match self {
            Activation::Relu => relu(tensor),
            Activation::Tanh => tanh(tensor),
            Activation::Sigmoid => sigmoid(tensor),
            Activation::Identity => tensor,
        }
    }
}

impl Default for Activation {
    fn default() -> Self {
        Activation::Relu
    }
}
