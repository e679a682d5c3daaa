//! Reward Net - neural scoring models for topic-based recommendation agents
//!
//! This library provides:
//! - Convolutional reward networks scoring (state, action) pairs, where the
//!   state is a distribution over topics and the action a topic-transition
//!   matrix (net module)
//! - A small dense-stack builder for plain feed-forward heads
//! - Backend type aliases for training and inference
//!
//! Training loops, experience collection, and model persistence are supplied
//! by external harnesses; this crate only constructs the networks.

pub mod net;
