//! # convosim — Interactive 2D Convolution Engine
//!
//! A pure, deterministic numeric engine for experimenting with small 2D
//! convolutions: kernel derivation (direct or unsharp-mask), padded
//! "same"-size convolution under configurable boundary policies, optional
//! range clipping, and a smart formatter that renders results as integers,
//! short decimals, or exact-looking fractions.
//!
//! The crate is the computational core behind an interactive convolution
//! simulator. The presentation layer owns cell parsing, grid sizing, and
//! rendering; this crate owns every number.
//!
//! ## Quick Start
//!
//! ```rust
//! use convosim::prelude::*;
//!
//! let image = Grid::from_rows(vec![
//!     vec![1.0, 2.0],
//!     vec![3.0, 4.0],
//! ])?;
//! let kernel = Grid::from_rows(vec![vec![1.0]])?;
//!
//! // Build the pipeline
//! let pipeline = Convolution::new()
//!     .boundary(ZeroFill)     // Out-of-range samples read as 0
//!     .mode(Direct)           // Use the kernel as given
//!     .build()?;
//!
//! // Run it
//! let result = pipeline.run(&image, &kernel)?;
//!
//! // A 1x1 identity kernel reproduces the image exactly
//! assert_eq!(result.output, image);
//! # Result::<(), ConvosimError>::Ok(())
//! ```
//!
//! ## Full Features
//!
//! ```rust
//! use convosim::prelude::*;
//!
//! let image = Grid::filled(3, 3, 1.0)?;
//! let blur = Grid::filled(3, 3, 1.0 / 9.0)?;
//!
//! let pipeline = Convolution::new()
//!     .boundary(ReplicateEdge)    // Clamp out-of-range coordinates
//!     .mode(UnsharpMask)          // Derive a sharpening kernel from `blur`
//!     .alpha(0.4)                 // Sharpening strength
//!     .clip(Unit)                 // Clamp output to [0.0, 1.0]
//!     .build()?;
//!
//! let result = pipeline.run(&image, &blur)?;
//! println!("{}", result);
//! # Result::<(), ConvosimError>::Ok(())
//! ```
//!
//! ## Formatting
//!
//! Every cell of every returned grid can be rendered independently:
//!
//! ```rust
//! use convosim::prelude::*;
//!
//! assert_eq!(format_value(3.0), "3");
//! assert_eq!(format_value(0.5), "0.5");
//! assert_eq!(format_value(1.0 / 3.0), "1/3");
//! ```
//!
//! ## Semantics worth knowing
//!
//! * The kernel is applied in its given orientation, **not** flipped as in
//!   the mathematical definition of convolution. Symmetric kernels cannot
//!   tell the difference; asymmetric kernels keep their weights where the
//!   user wrote them.
//! * The unsharp-mask impulse center uses integer division
//!   (`rows / 2`, `cols / 2`), which for even dimensions lands one cell
//!   below the true center. This is the accepted convention, not a bug.
//! * A kernel larger than the image is well defined via boundary padding and
//!   is not rejected.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and shared error types.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - convolution and clipping.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        BoundaryPolicy::ReplicateEdge,
        BoundaryPolicy::ZeroFill,
        ClipRange::EightBit,
        ClipRange::Unit,
        ConvolutionBuilder as Convolution, ConvolutionPipeline, ConvolutionResult, ConvosimError,
        Grid,
        OperationMode::Direct,
        OperationMode::UnsharpMask,
        format_value,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
