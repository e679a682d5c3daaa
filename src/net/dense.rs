//! Dense-stack builder: two hidden layers and a linear output head
//!
//! A small feed-forward builder for scoring heads that do not need the
//! convolutional front end. The two hidden activations are configurable;
//! the output layer is always a plain affine transform so downstream code
//! decides how (or whether) to bound the result.

use burn::{
    module::{Ignored, Module},
    nn::{Linear, LinearConfig},
    tensor::{backend::Backend, Tensor},
};
use serde::{Deserialize, Serialize};

use super::activation::Activation;

/// Configuration for a two-hidden-layer dense stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseStackConfig {
    /// Width of the input vectors
    pub n_inputs: usize,
    /// Width of the first hidden layer
    pub n_hidden1: usize,
    /// Width of the second hidden layer
    pub n_hidden2: usize,
    /// Width of the output
    pub n_outputs: usize,
    /// Nonlinearity after the first hidden layer
    pub activation1: Activation,
    /// Nonlinearity after the second hidden layer
    pub activation2: Activation,
}

impl DenseStackConfig {
    /// Create a configuration with ReLU hidden activations
    pub fn new(n_inputs: usize, n_hidden1: usize, n_hidden2: usize, n_outputs: usize) -> Self {
        Self {
            n_inputs,
            n_hidden1,
            n_hidden2,
            n_outputs,
            activation1: Activation::default(),
            activation2: Activation::default(),
        }
    }

    /// Replace both hidden activations
    pub fn with_activations(mut self, activation1: Activation, activation2: Activation) -> Self {
        self.activation1 = activation1;
        self.activation2 = activation2;
        self
    }

    /// Validate layer widths
    ///
    /// Returns `Ok(())` if all widths are at least 1, `Err(String)` with an
    /// error message otherwise.
    pub fn validate(&self) -> Result<(), String> {
        if self.n_inputs == 0 {
            return Err("n_inputs must be at least 1".to_string());
        }

        if self.n_hidden1 == 0 {
            return Err("n_hidden1 must be at least 1".to_string());
        }

        if self.n_hidden2 == 0 {
            return Err("n_hidden2 must be at least 1".to_string());
        }

        if self.n_outputs == 0 {
            return Err("n_outputs must be at least 1".to_string());
        }

        Ok(())
    }

    /// Initialize a dense stack from this configuration
    ///
    /// Each call creates fresh, independent parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reward_net::net::{default_device, DenseStackConfig, InferenceBackend};
    /// use burn::tensor::Tensor;
    ///
    /// let device = default_device();
    /// let stack = DenseStackConfig::new(15, 32, 16, 4).init::<InferenceBackend>(&device);
    ///
    /// let input = Tensor::zeros([8, 15], &device);
    /// let output = stack.forward(input);
    /// assert_eq!(output.dims(), [8, 4]);
    /// ```
    pub fn init<B: Backend>(&self, device: &B::Device) -> DenseStack<B> {
        DenseStack {
            fc1: LinearConfig::new(self.n_inputs, self.n_hidden1).init(device),
            fc2: LinearConfig::new(self.n_hidden1, self.n_hidden2).init(device),
            out: LinearConfig::new(self.n_hidden2, self.n_outputs).init(device),
            activation1: Ignored(self.activation1),
            activation2: Ignored(self.activation2),
        }
    }
}

/// Two hidden dense layers followed by a linear output head
#[derive(Module, Debug)]
pub struct DenseStack<B: Backend> {
    fc1: Linear<B>,
    fc2: Linear<B>,
    out: Linear<B>,
    activation1: Ignored<Activation>,
    activation2: Ignored<Activation>,
}

impl<B: Backend> DenseStack<B> {
    /// Forward pass: `[batch, n_inputs]` to `[batch, n_outputs]`
    ///
    /// The output head applies no nonlinearity, so results are unconstrained
    /// in sign and magnitude.
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.fc1.forward(input);
        let x = self.activation1.apply(x);

        let x = self.fc2.forward(x);
        let x = self.activation2.apply(x);

        self.out.forward(x)
    }
}
