//! Direction selection and the target luminance bound.
//!
//! Solving the WCAG contrast ratio definition, (L1 + 0.05) / (L2 + 0.05),
//! for the foreground luminance turns a required ratio into a one-sided
//! luminance bound. Which side depends on whether the adjustment lightens
//! or darkens, and that choice is what this module makes.

use crate::color::{contrast_from_luminances, LUMINANCE_OFFSET};

/// The background luminance at which lightening and darkening offer equal
/// headroom.
///
/// It is the solution of (1 + 0.05) / (x + 0.05) = (x + 0.05) / (0 + 0.05),
/// i.e. the luminance whose contrast against pure white equals its contrast
/// against pure black. Below it, white is the farther extreme and the
/// default direction is to lighten; above it, to darken.
pub const DIRECTION_THRESHOLD: f64 = 0.179129;

/// The direction in which an adjustment moves a color's lightness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Move toward pure white.
    Lighten,
    /// Move toward pure black.
    Darken,
}

/// A one-sided bound on relative luminance.
///
/// A bound is always either a floor or a ceiling, never both: a lightening
/// adjustment needs a minimum luminance, a darkening adjustment a maximum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LuminanceBound {
    /// The luminance must be at least this value.
    AtLeast(f64),
    /// The luminance must be at most this value.
    AtMost(f64),
}

impl LuminanceBound {
    /// Get the target luminance the bound was derived from.
    pub fn target(&self) -> f64 {
        match *self {
            Self::AtLeast(target) | Self::AtMost(target) => target,
        }
    }

    /// Determine whether the given luminance satisfies this bound.
    pub fn is_satisfied_by(&self, luminance: f64) -> bool {
        match *self {
            Self::AtLeast(target) => luminance >= target,
            Self::AtMost(target) => luminance <= target,
        }
    }
}

/// Select the adjustment direction.
///
/// The default direction is whichever extreme is farther from the
/// background: lighten for backgrounds darker than [`DIRECTION_THRESHOLD`],
/// darken otherwise. With `preserve_direction` set, the original color's
/// relative position wins instead, but only if the required ratio is
/// actually reachable at the corresponding extreme: a darker-than-background
/// original forces darkening only when the background already clears the
/// ratio against pure black, and a lighter-than-background original forces
/// lightening only when it clears the ratio against pure white. A color
/// exactly as luminous as its background counts as "not darker".
pub fn direction_for(
    background_luminance: f64,
    original_luminance: f64,
    required_ratio: f64,
    preserve_direction: bool,
) -> Direction {
    let fallback = if background_luminance < DIRECTION_THRESHOLD {
        Direction::Lighten
    } else {
        Direction::Darken
    };

    if !preserve_direction {
        return fallback;
    }

    if original_luminance < background_luminance {
        if contrast_from_luminances(background_luminance, 0.0) >= required_ratio {
            return Direction::Darken;
        }
    } else if contrast_from_luminances(background_luminance, 1.0) >= required_ratio {
        return Direction::Lighten;
    }

    fallback
}

/// Derive the luminance bound for the given background and direction.
///
/// Lightening yields `AtLeast(R·(L_bg + 0.05) − 0.05)`, darkening yields
/// `AtMost((L_bg + 0.05)/R − 0.05)`, both clamped to unit range.
pub fn luminance_bound(
    background_luminance: f64,
    required_ratio: f64,
    direction: Direction,
) -> LuminanceBound {
    // Plain multiply, not mul_add: fixed stepping compares quantized
    // luminances against this exact value.
    let offset = background_luminance + LUMINANCE_OFFSET;
    match direction {
        Direction::Lighten => LuminanceBound::AtLeast(
            (required_ratio * offset - LUMINANCE_OFFSET).clamp(0.0, 1.0),
        ),
        Direction::Darken => {
            LuminanceBound::AtMost((offset / required_ratio - LUMINANCE_OFFSET).clamp(0.0, 1.0))
        }
    }
}

// ====================================================================================================================
