//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer provides orchestration and execution control:
//! - Fail-fast validation of inputs and parameters
//! - The pipeline executor (kernel derivation → convolution → clipping)
//! - The result structure and its rendering
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Pipeline execution.
pub mod executor;

/// Result structures.
pub mod output;
