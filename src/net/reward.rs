//! Convolutional reward network for (state, action) scoring
//!
//! This module implements the reward estimator: a convolutional network that
//! scores a topic-transition action against the current topic distribution.
//!
//! # Architecture
//!
//! ```text
//! Action: [batch, d, d]
//!   ↓ Reshape: [batch, 1, d, d]
//!   ↓ Conv2d(1→f1, k=k1, SAME) + ReLU
//!   ↓ Conv2d(f1→f2, k=k2, SAME) + ReLU
//!   ↓ Flatten: [batch, f2*d*d]
//!   ↓ Linear(f2*d*d → fc3_width) + ReLU (+ optional dropout)
//!   ↓ Concat with state [batch, d]: [batch, fc3_width + d]
//!   ↓ Linear(fc3_width + d → fc4_width) + ReLU (+ optional dropout)
//!   ↓ Linear(fc4_width → 1) + Tanh
//! Score: [batch, 1], every element in (-1, 1)
//! ```
//!
//! Both convolutions use stride 1 and same-size padding, so the spatial
//! dimensions stay `d × d` through the trunk. Dropout and L1+L2 weight decay
//! are optional and apply only to the `fc3`/`fc4` stages, never to the head.
//! Weight-decay penalties are not folded into the forward pass: the training
//! harness collects them from [`RewardNetwork::weight_penalties`] and adds
//! them to its loss.
//!
//! # Example
//!
//! ```rust
//! use reward_net::net::{default_device, InferenceBackend, RewardNetConfig};
//! use burn::tensor::Tensor;
//!
//! let device = default_device();
//! let config = RewardNetConfig::new(15);
//! let network = config.init::<InferenceBackend>(&device);
//!
//! // Score a batch of 4 (state, action) pairs
//! let state = Tensor::zeros([4, 15], &device);
//! let action = Tensor::zeros([4, 15, 15], &device);
//! let score = network.forward(state, action);
//!
//! assert_eq!(score.dims(), [4, 1]);
//! ```

use burn::{
    module::{Ignored, Module},
    nn::{
        conv::{Conv2d, Conv2dConfig},
        Dropout, DropoutConfig, Linear, LinearConfig, PaddingConfig2d,
    },
    tensor::{
        activation::{relu, tanh},
        backend::Backend,
        Tensor,
    },
};
use serde::{Deserialize, Serialize};

use super::penalty::{l1_l2_penalty, WeightDecay};

/// Configuration for the reward network
///
/// Field defaults match the shipped reward estimator: a 15-topic model with
/// a 1-filter 5×5 convolution followed by a 2-filter 3×3 convolution and
/// narrow dense reductions. Dropout and weight decay are off unless engaged
/// through [`with_dropout`](Self::with_dropout) and
/// [`with_weight_decay`](Self::with_weight_decay).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardNetConfig {
    /// Number of topics `d`; states are `[batch, d]`, actions `[batch, d, d]`
    pub topics: usize,

    /// Number of filters in the first convolution
    ///
    /// Default: 1
    pub conv1_filters: usize,

    /// Kernel side length of the first convolution (must be odd)
    ///
    /// Default: 5
    pub conv1_kernel: usize,

    /// Number of filters in the second convolution
    ///
    /// Default: 2
    pub conv2_filters: usize,

    /// Kernel side length of the second convolution (must be odd)
    ///
    /// Default: 3
    pub conv2_kernel: usize,

    /// Width of the dense reduction over the flattened convolution output
    ///
    /// Default: 8
    pub fc3_width: usize,

    /// Width of the dense reduction after concatenating the state
    ///
    /// Default: 4
    pub fc4_width: usize,

    /// Fraction of `fc3`/`fc4` activations to drop during training
    ///
    /// `None` disables dropout. Active only under an autodiff backend;
    /// inference backends pass activations through unchanged.
    ///
    /// Default: `None`
    pub dropout: Option<f64>,

    /// L1+L2 penalty coefficients for the `fc3`/`fc4` weights
    ///
    /// `None` disables weight decay. The head is never penalized.
    ///
    /// Default: `None`
    pub weight_decay: Option<WeightDecay>,
}

impl RewardNetConfig {
    /// Customary dropout fraction for the regularized variants
    pub const DEFAULT_DROPOUT: f64 = 0.4;

    /// Create a configuration with the default architecture for `topics`
    pub fn new(topics: usize) -> Self {
        Self {
            topics,
            conv1_filters: 1,
            conv1_kernel: 5,
            conv2_filters: 2,
            conv2_kernel: 3,
            fc3_width: 8,
            fc4_width: 4,
            dropout: None,
            weight_decay: None,
        }
    }

    /// Enable dropout on the `fc3`/`fc4` stages
    pub fn with_dropout(mut self, prob: f64) -> Self {
        self.dropout = Some(prob);
        self
    }

    /// Enable L1+L2 weight decay on the `fc3`/`fc4` weights
    pub fn with_weight_decay(mut self, decay: WeightDecay) -> Self {
        self.weight_decay = Some(decay);
        self
    }

    /// Validate hyperparameter ranges
    ///
    /// Returns `Ok(())` if all parameters are in valid ranges, `Err(String)`
    /// with an error message otherwise. Shape agreement between actual input
    /// tensors is not checked here; mismatches surface from the tensor ops.
    pub fn validate(&self) -> Result<(), String> {
        if self.topics == 0 {
            return Err("topics must be at least 1".to_string());
        }

        if self.conv1_filters == 0 {
            return Err("conv1_filters must be at least 1".to_string());
        }

        if self.conv2_filters == 0 {
            return Err("conv2_filters must be at least 1".to_string());
        }

        if self.conv1_kernel == 0 || self.conv1_kernel % 2 == 0 {
            return Err(format!(
                "conv1_kernel must be odd for same-size padding, got {}",
                self.conv1_kernel
            ));
        }

        if self.conv2_kernel == 0 || self.conv2_kernel % 2 == 0 {
            return Err(format!(
                "conv2_kernel must be odd for same-size padding, got {}",
                self.conv2_kernel
            ));
        }

        if self.conv1_kernel > self.topics {
            return Err(format!(
                "conv1_kernel ({}) cannot exceed the action matrix side ({})",
                self.conv1_kernel, self.topics
            ));
        }

        if self.conv2_kernel > self.topics {
            return Err(format!(
                "conv2_kernel ({}) cannot exceed the action matrix side ({})",
                self.conv2_kernel, self.topics
            ));
        }

        if self.fc3_width == 0 {
            return Err("fc3_width must be at least 1".to_string());
        }

        if self.fc4_width == 0 {
            return Err("fc4_width must be at least 1".to_string());
        }

        if let Some(prob) = self.dropout {
            if !(0.0..1.0).contains(&prob) {
                return Err(format!("dropout must be in [0, 1), got {}", prob));
            }
        }

        if let Some(decay) = self.weight_decay {
            decay.validate()?;
        }

        Ok(())
    }

    /// Initialize a reward network from this configuration
    ///
    /// Each call creates fresh, independent parameters; two networks built
    /// from the same configuration never share weights.
    pub fn init<B: Backend>(&self, device: &B::Device) -> RewardNetwork<B> {
        // Same-size padding with stride 1 keeps the trunk at d × d, so the
        // flattened width is known from the configuration alone.
        let flattened_dim = self.conv2_filters * self.topics * self.topics;

        RewardNetwork {
            conv1: Conv2dConfig::new(
                [1, self.conv1_filters],
                [self.conv1_kernel, self.conv1_kernel],
            )
            .with_padding(PaddingConfig2d::Same)
            .init(device),
            conv2: Conv2dConfig::new(
                [self.conv1_filters, self.conv2_filters],
                [self.conv2_kernel, self.conv2_kernel],
            )
            .with_padding(PaddingConfig2d::Same)
            .init(device),
            fc3: LinearConfig::new(flattened_dim, self.fc3_width).init(device),
            fc4: LinearConfig::new(self.fc3_width + self.topics, self.fc4_width).init(device),
            out: LinearConfig::new(self.fc4_width, 1).init(device),
            dropout: self.dropout.map(|prob| DropoutConfig::new(prob).init()),
            weight_decay: Ignored(self.weight_decay),
        }
    }
}

impl Default for RewardNetConfig {
    fn default() -> Self {
        Self::new(15)
    }
}

/// Convolutional reward network
///
/// Scores a batch of (state, action) pairs with a tanh-bounded scalar per
/// pair. Generic over the backend: use an autodiff backend for training
/// (which also activates dropout, when configured) and a plain backend for
/// deterministic inference.
#[derive(Module, Debug)]
pub struct RewardNetwork<B: Backend> {
    /// First convolution over the single-channel action matrix
    conv1: Conv2d<B>,
    /// Second convolution over the first stage's feature maps
    conv2: Conv2d<B>,
    /// Dense reduction of the flattened convolution output
    fc3: Linear<B>,
    /// Dense reduction after concatenating the state vector
    fc4: Linear<B>,
    /// Scalar output head
    out: Linear<B>,
    /// Dropout applied after `fc3` and `fc4`, when configured
    dropout: Option<Dropout>,
    /// Penalty coefficients for `weight_penalties`, when configured
    weight_decay: Ignored<Option<WeightDecay>>,
}

impl<B: Backend> RewardNetwork<B> {
    /// Forward pass through the network
    ///
    /// # Arguments
    ///
    /// * `state` - Tensor with shape `[batch, d]`, the topic distribution
    /// * `action` - Tensor with shape `[batch, d, d]`, the transition matrix
    ///
    /// Both inputs must agree on the batch size and on `d`; disagreements
    /// panic inside the tensor ops.
    ///
    /// # Returns
    ///
    /// Tensor with shape `[batch, 1]`, every element in (-1, 1).
    pub fn forward(&self, state: Tensor<B, 2>, action: Tensor<B, 3>) -> Tensor<B, 2> {
        // Add the channel dimension: [batch, d, d] → [batch, 1, d, d]
        let [batch_size, height, width] = action.dims();
        let x = action.reshape([batch_size, 1, height, width]);

        let x = relu(self.conv1.forward(x));
        // After conv1: [batch, f1, d, d]

        let x = relu(self.conv2.forward(x));
        // After conv2: [batch, f2, d, d]

        // Flatten: [batch, f2, d, d] → [batch, f2*d*d]
        let [batch_size, channels, height, width] = x.dims();
        let x = x.reshape([batch_size, channels * height * width]);

        let x = relu(self.fc3.forward(x));
        let x = self.apply_dropout(x);
        // After fc3: [batch, fc3_width]

        // Join the convolved action features with the raw state vector
        let x = Tensor::cat(vec![x, state], 1);
        // After concat: [batch, fc3_width + d]

        let x = relu(self.fc4.forward(x));
        let x = self.apply_dropout(x);
        // After fc4: [batch, fc4_width]

        // Bounded scalar head
        tanh(self.out.forward(x))
    }

    /// L1+L2 penalty terms for the regularized dense stages
    ///
    /// Returns one term per penalized layer (`fc3`, `fc4`), or an empty list
    /// when the network was configured without weight decay. The training
    /// harness sums these into its loss; the forward pass never includes
    /// them.
    pub fn weight_penalties(&self) -> Vec<Tensor<B, 1>> {
        match self.weight_decay.0 {
            Some(decay) => vec![
                l1_l2_penalty(&self.fc3, decay),
                l1_l2_penalty(&self.fc4, decay),
            ],
            None => Vec::new(),
        }
    }

    fn apply_dropout(&self, x: Tensor<B, 2>) -> Tensor<B, 2> {
        match &self.dropout {
            Some(dropout) => dropout.forward(x),
            None => x,
        }
    }
}
