//! Output range clipping.
//!
//! ## Purpose
//!
//! This module clamps every output cell into a preset value range, matching
//! how display pipelines constrain pixel intensities to `[0, 255]` or
//! `[0.0, 1.0]`.
//!
//! ## Design notes
//!
//! * **Presets only**: The two ranges users pick from are fixed; clipping is
//!   configured as `Option<ClipRange>` and skipped entirely when absent.
//! * **Idempotent**: Clipping an already-clipped grid is a no-op.
//!
//! ## Invariants
//!
//! * Every clipped cell satisfies `low <= value <= high`.
//! * Dimensions are preserved.
//!
//! ## Non-goals
//!
//! * This module does not rescale or normalize values; it only clamps.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::grid::Grid;

// ============================================================================
// Clip Range
// ============================================================================

/// Preset value range for output clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipRange {
    /// Clamp to `[0.0, 1.0]` (normalized intensities).
    #[default]
    Unit,

    /// Clamp to `[0.0, 255.0]` (8-bit intensities).
    EightBit,
}

impl ClipRange {
    /// Get the name of the clip range.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ClipRange::Unit => "Unit",
            ClipRange::EightBit => "EightBit",
        }
    }

    /// The `(low, high)` bounds of this range.
    #[inline]
    pub fn bounds<T: Float>(&self) -> (T, T) {
        match self {
            ClipRange::Unit => (T::zero(), T::one()),
            ClipRange::EightBit => (T::zero(), T::from(255.0).unwrap()),
        }
    }
}

// ============================================================================
// Clipping
// ============================================================================

/// Clamp every cell of `grid` into `[low, high]`, producing a new grid.
pub fn clip_grid<T: Float>(grid: &Grid<T>, low: T, high: T) -> Grid<T> {
    grid.map(|v| {
        if v < low {
            low
        } else if v > high {
            high
        } else {
            v
        }
    })
}
