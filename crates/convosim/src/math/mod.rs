//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the
//! pipeline:
//! - Boundary policies for out-of-range sampling and padding
//! - Effective-kernel derivation (direct and unsharp-mask)
//! - Smart rational formatting of cell values
//!
//! These are reusable building blocks with no pipeline-specific logic.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Boundary policies for out-of-range grid sampling.
pub mod boundary;

/// Effective-kernel derivation.
pub mod kernel;

/// Smart numeric formatting.
pub mod format;
