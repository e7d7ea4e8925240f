//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core transformation algorithms:
//! - The padded "same"-size 2D convolution
//! - Output range clipping
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Padded "same"-size 2D convolution.
pub mod convolve;

/// Output range clipping.
pub mod clip;
