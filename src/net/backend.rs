//! Backend type aliases and device management
//!
//! This module provides convenient type aliases for the Burn backends used
//! with the reward networks, plus a helper for obtaining the default device.
//!
//! # Backend Selection
//!
//! - **TrainingBackend**: Autodiff-enabled NdArray backend. Required when an
//!   external harness differentiates through a forward pass; also the only
//!   backend on which dropout layers are active.
//! - **InferenceBackend**: Plain NdArray backend for scoring. Dropout layers
//!   are identity here, so scores are deterministic.
//!
//! The NdArray backend is sufficient for these networks given their small
//! topic dimension and layer widths. A GPU backend (Wgpu) could be swapped in
//! later if reward models grow beyond CPU scale.
//!
//! # Example
//!
//! ```rust
//! use reward_net::net::{default_device, InferenceBackend, RewardNetConfig};
//!
//! let device = default_device();
//! let network = RewardNetConfig::new(15).init::<InferenceBackend>(&device);
//! ```

use burn::backend::{
    ndarray::{NdArray, NdArrayDevice},
    Autodiff,
};

/// Backend type for training (with autodiff)
///
/// Use this alias when the returned network feeds a gradient-based harness.
/// Dropout, when configured, is only applied under this backend.
pub type TrainingBackend = Autodiff<NdArray<f32>>;

/// Backend type for inference (without autodiff)
///
/// Use this alias for pure scoring. No gradients are tracked and dropout
/// layers pass activations through unchanged.
pub type InferenceBackend = NdArray<f32>;

/// Get the default device for computation
///
/// Returns the default NdArray device (CPU). Both backend aliases share this
/// device type, so the same device value works for training and inference.
pub fn default_device() -> NdArrayDevice {
    NdArrayDevice::default()
}
