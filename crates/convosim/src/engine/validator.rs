//! Input validation for pipeline configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for pipeline configuration
//! parameters and input grids. It checks requirements such as non-empty
//! grids and finite configuration scalars.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Redundant by design**: Grid constructors already enforce the
//!   rectangle invariants; the input checks here fail fast instead of
//!   producing undefined behavior if an invariant is ever bypassed.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: `alpha` is an unconstrained real but must be finite.
//! * **Grid Requirements**: Both input grids must have at least one cell. A
//!   kernel larger than the image is well defined via padding and is not
//!   rejected.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair invalid inputs.
//! * This module does not perform the convolution itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ConvosimError;
use crate::primitives::grid::Grid;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for pipeline configuration and input grids.
///
/// Provides static methods returning `Result<(), ConvosimError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the image and base-kernel grids for a pipeline run.
    pub fn validate_inputs<T: Float>(
        image: &Grid<T>,
        kernel: &Grid<T>,
    ) -> Result<(), ConvosimError> {
        if image.rows() == 0 || image.cols() == 0 {
            return Err(ConvosimError::EmptyGrid);
        }
        if kernel.rows() == 0 || kernel.cols() == 0 {
            return Err(ConvosimError::EmptyGrid);
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the sharpening strength scalar.
    ///
    /// `alpha` may be negative or greater than one; only non-finite values
    /// are rejected.
    pub fn validate_alpha<T: Float>(alpha: T) -> Result<(), ConvosimError> {
        if !alpha.is_finite() {
            return Err(ConvosimError::InvalidNumericValue(format!(
                "alpha={}",
                alpha.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ConvosimError> {
        if let Some(param) = duplicate_param {
            return Err(ConvosimError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
