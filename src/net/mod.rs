//! Neural network builders for reward estimation
//!
//! Provides:
//! - Convolutional reward network over (state, action) pairs with optional
//!   dropout and L1+L2 weight decay
//! - Dense-stack builder for feed-forward scoring heads
//! - Activation selection for configurable nonlinearities
//! - Backend type aliases and device management

pub mod activation;
pub mod backend;
pub mod dense;
pub mod penalty;
pub mod reward;

pub use activation::Activation;
pub use backend::{default_device, InferenceBackend, TrainingBackend};
pub use dense::{DenseStack, DenseStackConfig};
pub use penalty::{l1_l2_penalty, WeightDecay};
pub use reward::{RewardNetConfig, RewardNetwork};
