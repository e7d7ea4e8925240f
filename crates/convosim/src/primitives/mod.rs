//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures and shared error types
//! used throughout the crate. It has zero internal dependencies within the
//! crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Rectangular value grids.
pub mod grid;

/// Shared error types.
pub mod errors;
