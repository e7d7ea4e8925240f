//! High-level API for the convolution pipeline.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder pattern for configuring a pipeline (boundary policy,
//! operation mode, sharpening strength, clipping) and produces a validated
//! runner that computes results from input grids.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//! * **Stateless runs**: The runner borrows nothing between calls; the
//!   presentation layer re-invokes `run` on demand after any input change,
//!   with no subscription model inside the core.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ConvolutionBuilder`] via `Convolution::new()`.
//! 2. Chain configuration methods (`.boundary()`, `.mode()`, `.alpha()`,
//!    `.clip()`).
//! 3. Call `.build()` to obtain a [`ConvolutionPipeline`], then `.run()` it
//!    against an image and base kernel.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::ConvolutionExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::clip::ClipRange;
pub use crate::engine::executor::ConvolutionConfig;
pub use crate::engine::output::ConvolutionResult;
pub use crate::math::boundary::BoundaryPolicy;
pub use crate::math::format::format_value;
pub use crate::math::kernel::OperationMode;
pub use crate::primitives::errors::ConvosimError;
pub use crate::primitives::grid::Grid;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a convolution pipeline.
#[derive(Debug, Clone)]
pub struct ConvolutionBuilder<T> {
    /// Boundary policy for out-of-range sampling.
    pub boundary: Option<BoundaryPolicy>,

    /// Operation mode selecting kernel derivation.
    pub mode: Option<OperationMode>,

    /// Sharpening strength for unsharp masking.
    pub alpha: Option<T>,

    /// Output clipping range.
    pub clip: Option<ClipRange>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ConvolutionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ConvolutionBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            boundary: None,
            mode: None,
            alpha: None,
            clip: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the boundary handling policy.
    pub fn boundary(mut self, policy: BoundaryPolicy) -> Self {
        if self.boundary.is_some() {
            self.duplicate_param = Some("boundary");
        }
        self.boundary = Some(policy);
        self
    }

    /// Set the operation mode.
    pub fn mode(mut self, mode: OperationMode) -> Self {
        if self.mode.is_some() {
            self.duplicate_param = Some("mode");
        }
        self.mode = Some(mode);
        self
    }

    /// Set the sharpening strength for `UnsharpMask` mode.
    ///
    /// Negative or greater-than-one values are accepted and simply change
    /// sharpening strength and sign.
    pub fn alpha(mut self, alpha: T) -> Self {
        if self.alpha.is_some() {
            self.duplicate_param = Some("alpha");
        }
        self.alpha = Some(alpha);
        self
    }

    /// Enable output clipping to a preset range.
    pub fn clip(mut self, range: ClipRange) -> Self {
        if self.clip.is_some() {
            self.duplicate_param = Some("clip");
        }
        self.clip = Some(range);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the pipeline runner.
    pub fn build(self) -> Result<ConvolutionPipeline<T>, ConvosimError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = ConvolutionConfig::default();
        let alpha = self.alpha.unwrap_or(defaults.alpha);

        // Validate alpha (finite; otherwise unconstrained)
        Validator::validate_alpha(alpha)?;

        Ok(ConvolutionPipeline {
            config: ConvolutionConfig {
                boundary: self.boundary.unwrap_or(defaults.boundary),
                mode: self.mode.unwrap_or(defaults.mode),
                alpha,
                clip: self.clip,
            },
        })
    }
}

// ============================================================================
// Pipeline Runner
// ============================================================================

/// Validated convolution pipeline, ready to run against input grids.
#[derive(Debug, Clone)]
pub struct ConvolutionPipeline<T> {
    config: ConvolutionConfig<T>,
}

impl<T: Float> ConvolutionPipeline<T> {
    /// Run the pipeline against an image and a base kernel.
    ///
    /// Returns the padded input, the effective kernel, and the output grid.
    /// Pure and idempotent: the same inputs always produce the same result.
    pub fn run(
        &self,
        image: &Grid<T>,
        base_kernel: &Grid<T>,
    ) -> Result<ConvolutionResult<T>, ConvosimError> {
        Validator::validate_inputs(image, base_kernel)?;

        Ok(ConvolutionExecutor::run_with_config(
            image,
            base_kernel,
            &self.config,
        ))
    }

    /// The validated configuration this pipeline runs with.
    pub fn config(&self) -> &ConvolutionConfig<T> {
        &self.config
    }
}
