//! L1+L2 weight-decay penalties
//!
//! Regularization is a value-returning concern here: networks expose the
//! penalty terms for their regularized layers, and the training harness sums
//! them into its loss. Nothing is attached to the graph implicitly.

use burn::{
    nn::Linear,
    tensor::{backend::Backend, Tensor},
};
use serde::{Deserialize, Serialize};

/// L1 and L2 coefficients for a weight-decay penalty
///
/// The penalty for a layer with weight matrix `W` is
/// `l1 * sum(|W|) + l2 * sum(W^2)`. The default coefficients are 1.0 each;
/// harnesses typically fold their own scale into the loss instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightDecay {
    /// Coefficient on the absolute-value term
    pub l1: f64,
    /// Coefficient on the squared term
    pub l2: f64,
}

impl WeightDecay {
    /// Create a penalty configuration with explicit coefficients
    pub fn new(l1: f64, l2: f64) -> Self {
        Self { l1, l2 }
    }

    /// Validate coefficient ranges
    ///
    /// Returns `Ok(())` if both coefficients are non-negative, `Err(String)`
    /// with an error message otherwise.
    pub fn validate(&self) -> Result<(), String> {
        if self.l1 < 0.0 {
            return Err(format!("l1 must be non-negative, got {}", self.l1));
        }

        if self.l2 < 0.0 {
            return Err(format!("l2 must be non-negative, got {}", self.l2));
        }

        Ok(())
    }
}

impl Default for WeightDecay {
    fn default() -> Self {
        Self { l1: 1.0, l2: 1.0 }
    }
}

/// Compute the L1+L2 penalty for a linear layer's weight matrix
///
/// The bias is not penalized. Returns a single-element tensor so the caller
/// can add it straight into a scalar loss.
pub fn l1_l2_penalty<B: Backend>(layer: &Linear<B>, decay: WeightDecay) -> Tensor<B, 1> {
    let weight = layer.weight.val();

    let l1_term = weight.clone().abs().sum().mul_scalar(decay.l1);
    let l2_term = weight.powf_scalar(2.0).sum().mul_scalar(decay.l2);

    l1_term + l2_term
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::ndarray::{NdArray, NdArrayDevice};
    use burn::nn::LinearConfig;

    type TestBackend = NdArray<f32>;

    fn layer(device: &NdArrayDevice) -> Linear<TestBackend> {
        LinearConfig::new(6, 3).init(device)
    }

    #[test]
    fn test_penalty_positive_for_nonzero_weights() {
        let device = NdArrayDevice::default();
        let layer = layer(&device);

        let penalty = l1_l2_penalty(&layer, WeightDecay::default());

        assert!(penalty.into_scalar() > 0.0);
    }

    #[test]
    fn test_zero_coefficients_give_zero_penalty() {
        let device = NdArrayDevice::default();
        let layer = layer(&device);

        let penalty = l1_l2_penalty(&layer, WeightDecay::new(0.0, 0.0));

        assert_eq!(penalty.into_scalar(), 0.0);
    }

    #[test]
    fn test_penalty_scales_linearly_in_coefficients() {
        let device = NdArrayDevice::default();
        let layer = layer(&device);

        let base = l1_l2_penalty(&layer, WeightDecay::new(1.0, 0.0)).into_scalar();
        let doubled = l1_l2_penalty(&layer, WeightDecay::new(2.0, 0.0)).into_scalar();

        assert!((doubled - 2.0 * base).abs() < 1e-5);
    }

    #[test]
    fn test_validation_rejects_negative_coefficients() {
        assert!(WeightDecay::new(-1.0, 0.5).validate().is_err());
        assert!(WeightDecay::new(0.5, -1.0).validate().is_err());
        assert!(WeightDecay::default().validate().is_ok());
    }
}
