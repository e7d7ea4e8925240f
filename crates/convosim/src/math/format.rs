//! Smart numeric formatting.
//!
//! ## Purpose
//!
//! This module renders a floating-point cell value as the shortest
//! unambiguous text: an integer literal, a short terminating decimal, or the
//! best bounded-denominator fraction. Values entered as exact fractions
//! (e.g., `1/3`) round-trip through floating-point convolution arithmetic and
//! reappear as a readable fraction rather than a long decimal.
//!
//! ## Design notes
//!
//! * **Total**: Formatting never fails; every finite value has a defined
//!   rendering, and non-finite values fall back to the standard float tokens.
//! * **Terminating check**: A value whose 4-digit and 8-digit roundings agree
//!   is treated as a terminating decimal and rendered from the 4-digit
//!   rounding, with no enforced trailing zeros.
//! * **Bounded search**: The fraction path runs the standard
//!   continued-fraction best-rational-approximation search with denominators
//!   capped at 1000, including the final semiconvergent comparison.
//!
//! ## Invariants
//!
//! * Whole numbers render with no fractional part.
//! * Fraction output `p/q` always has `1 <= q <= 1000` and `gcd(|p|, q) = 1`
//!   (convergents of a continued fraction are already in lowest terms).
//!
//! ## Non-goals
//!
//! * This module does not parse text back into numbers.
//! * This module does not localize output.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use num_traits::Float;

// ============================================================================
// Constants
// ============================================================================

/// Upper bound on fraction denominators.
const MAX_DENOMINATOR: i64 = 1000;

/// 2^53: the magnitude below which an f64 represents integers exactly.
///
/// Whole values at or above this are rendered through the decimal path,
/// where rounding to 4 and 8 digits is the identity anyway.
const INT_EXACT_LIMIT: f64 = 9_007_199_254_740_992.0;

// ============================================================================
// Formatting
// ============================================================================

/// Render a value as an integer literal, a short terminating decimal, or a
/// best rational approximation with denominator at most 1000.
pub fn format_value<T: Float>(value: T) -> String {
    let v = value.to_f64().unwrap_or(f64::NAN);

    // Non-finite values do not arise from normal configurations; render the
    // standard float tokens as a sentinel.
    if !v.is_finite() {
        return format!("{v}");
    }

    // 1. Whole numbers render with no fractional part.
    if v == v.floor() && v.abs() < INT_EXACT_LIMIT {
        return format!("{}", v as i64);
    }

    // 2. Terminating decimals: 4-digit and 8-digit roundings agree.
    let round4 = round_to(v, 4);
    let round8 = round_to(v, 8);
    if round4 == round8 {
        return format!("{round4}");
    }

    // 3. Repeating decimals: best rational with bounded denominator.
    let (p, q) = best_rational(v, MAX_DENOMINATOR);
    format!("{p}/{q}")
}

/// Round to `digits` decimal places.
#[inline]
fn round_to(v: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (v * scale).round() / scale
}

// ============================================================================
// Best Rational Approximation
// ============================================================================

/// Find the closest fraction `p/q` to `value` with `q <= max_den`.
///
/// Walks the continued-fraction convergents of `value` until the denominator
/// bound is exceeded, then compares the last convergent against the best
/// semiconvergent, preferring the convergent on ties.
fn best_rational(value: f64, max_den: i64) -> (i64, i64) {
    let negative = value < 0.0;
    let x = value.abs();

    // Convergent recurrence state: (p0, q0) is the previous convergent,
    // (p1, q1) the current one.
    let (mut p0, mut q0): (i64, i64) = (0, 1);
    let (mut p1, mut q1): (i64, i64) = (1, 0);
    let mut frac = x;

    loop {
        let a = frac.floor();
        if a >= i64::MAX as f64 {
            break;
        }
        let a_i = a as i64;

        let next_q = match q1.checked_mul(a_i).and_then(|v| v.checked_add(q0)) {
            Some(q) if q <= max_den => q,
            _ => break,
        };
        let next_p = match p1.checked_mul(a_i).and_then(|v| v.checked_add(p0)) {
            Some(p) => p,
            None => break,
        };

        p0 = p1;
        q0 = q1;
        p1 = next_p;
        q1 = next_q;

        let rem = frac - a;
        if rem <= 0.0 {
            // Exact expansion terminated.
            return signed(p1, q1, negative);
        }
        frac = 1.0 / rem;
    }

    if q1 == 0 {
        // The very first partial quotient overflowed; the value is far
        // outside any q <= 1000 fraction's useful range.
        return signed(x.round() as i64, 1, negative);
    }

    // Best semiconvergent under the bound.
    let k = (max_den - q0) / q1;
    let semi_p = p0 + k * p1;
    let semi_q = q0 + k * q1;

    let err_conv = (x - p1 as f64 / q1 as f64).abs();
    let err_semi = (x - semi_p as f64 / semi_q as f64).abs();
    if err_conv <= err_semi {
        signed(p1, q1, negative)
    } else {
        signed(semi_p, semi_q, negative)
    }
}

#[inline]
fn signed(p: i64, q: i64, negative: bool) -> (i64, i64) {
    if negative { (-p, q) } else { (p, q) }
}
