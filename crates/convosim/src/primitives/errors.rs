//! Error types for convolution pipeline operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building
//! grids, configuring the pipeline, or running a convolution.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Builder misconfiguration is caught when `build()` is called.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Grid validation**: Empty grids, jagged rows, mismatched buffer lengths.
//! 2. **Parameter validation**: Non-finite configuration scalars.
//! 3. **Builder constraints**: Each parameter may be configured at most once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery; the pipeline is
//!   deterministic, so retrying a failed call changes nothing.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for convolution pipeline operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvosimError {
    /// A grid has zero rows or zero columns.
    EmptyGrid,

    /// A grid's rows have unequal lengths.
    JaggedGrid {
        /// Index of the offending row.
        row: usize,
        /// Expected row length (length of the first row).
        expected: usize,
        /// Actual length of the offending row.
        got: usize,
    },

    /// A row-major cell buffer does not match the declared dimensions.
    SizeMismatch {
        /// Expected number of cells (`rows * cols`).
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// A configuration scalar is NaN or infinite.
    InvalidNumericValue(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ConvosimError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyGrid => write!(f, "Grid has zero rows or zero columns"),
            Self::JaggedGrid { row, expected, got } => {
                write!(
                    f,
                    "Jagged grid: row {row} has {got} cells, expected {expected}"
                )
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "Size mismatch: expected {expected} cells, got {actual}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ConvosimError {}
