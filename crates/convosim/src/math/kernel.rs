//! Effective-kernel derivation.
//!
//! ## Purpose
//!
//! This module turns the user-supplied base kernel into the kernel the
//! convolution actually applies. In `Direct` mode the base kernel is used as
//! given; in `UnsharpMask` mode a sharpening kernel is derived from the base
//! kernel (interpreted as a blur kernel) and a strength scalar `alpha`.
//!
//! ## Design notes
//!
//! * **Single kernel**: The unsharp-mask identity
//!   `sharpened = (1 + alpha) * original - alpha * blurred` is folded into one
//!   convolution kernel via an impulse grid, so the engine runs one pass.
//! * **Center convention**: The impulse lands at `(rows / 2, cols / 2)` with
//!   integer division. For even dimensions this is one cell below the true
//!   center; that bias is part of the kernel's observable behavior and is
//!   kept as is.
//!
//! ## Key concepts
//!
//! * **Unsharp masking**: Sharpening expressed as original plus a scaled
//!   difference from a blurred version.
//! * **Impulse grid**: All-zero grid with a single 1 at the center cell;
//!   convolving with it is the identity.
//!
//! ## Invariants
//!
//! * The effective kernel has the same dimensions as the base kernel.
//! * `Direct` mode returns the base kernel values unchanged.
//!
//! ## Non-goals
//!
//! * This module does not constrain `alpha`; negative or greater-than-one
//!   values simply change sharpening strength and sign.
//! * This module does not normalize kernels.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::grid::Grid;

// ============================================================================
// Operation Mode
// ============================================================================

/// Operation mode selecting how the effective kernel is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationMode {
    /// Use the input kernel as given.
    #[default]
    Direct,

    /// Derive a sharpening kernel from the input blur kernel and `alpha`.
    UnsharpMask,
}

impl OperationMode {
    /// Get the name of the operation mode.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            OperationMode::Direct => "Direct",
            OperationMode::UnsharpMask => "UnsharpMask",
        }
    }
}

// ============================================================================
// Kernel Derivation
// ============================================================================

/// Derive the effective convolution kernel from the base kernel, operation
/// mode, and sharpening strength `alpha`.
///
/// In `UnsharpMask` mode each cell becomes
/// `(1 + alpha) * I[r][c] - alpha * base[r][c]`, where `I` is the impulse
/// grid with a single 1 at `(rows / 2, cols / 2)`.
pub fn build_kernel<T: Float>(base: &Grid<T>, mode: OperationMode, alpha: T) -> Grid<T> {
    match mode {
        OperationMode::Direct => base.clone(),
        OperationMode::UnsharpMask => {
            let (rows, cols) = (base.rows(), base.cols());
            // Integer-division center, biased toward the lower index for
            // even dimensions.
            let (center_r, center_c) = (rows / 2, cols / 2);
            let gain = T::one() + alpha;

            let mut data = Vec::with_capacity(rows * cols);
            for r in 0..rows {
                for c in 0..cols {
                    let impulse = if r == center_r && c == center_c {
                        T::one()
                    } else {
                        T::zero()
                    };
                    data.push(gain * impulse - alpha * base.get(r, c));
                }
            }

            Grid::from_parts(rows, cols, data)
        }
    }
}
