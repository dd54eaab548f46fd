//! Convergence of a color's lightness onto a luminance bound.
//!
//! Both strategies move a color along its lightness axis only, leave hue and
//! chroma alone as far as their color model can express that, clamp at the
//! black/white extremes, and carry a hard iteration ceiling so a pass always
//! terminates. They differ in the model they step through and in how closely
//! they land on the bound; see [`Strategy`].

use csscolorparser::Color;
use log::warn;
use palette::{Clamp, FromColor, OklabHue, Oklch, Srgb};

use crate::color::{brightness, luminance};
use crate::target::LuminanceBound;

/// The lightness increment of one fixed step, on the unit HSL scale.
const STEP: f64 = 0.01;

/// The YIQ brightness beyond which fixed stepping stops lightening.
const BRIGHTNESS_CEILING: f64 = 0.99;

/// The YIQ brightness beneath which fixed stepping stops darkening.
const BRIGHTNESS_FLOOR: f64 = 0.01;

/// The ceiling on fixed steps. The unit lightness scale is exhausted after
/// 100 steps, so this only guards against a stalled step.
const MAX_STEPS: usize = 120;

/// The luminance tolerance at which bisection accepts a candidate.
const TOLERANCE: f64 = 0.001;

/// The ceiling on bisection rounds.
const MAX_ROUNDS: usize = 100;

/// A strategy for shifting a color's lightness onto a luminance bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Step HSL lightness by 1% at a time until the bound is met or the
    /// brightness scale runs out.
    ///
    /// Every luminance in this strategy is read at two-decimal precision,
    /// the background luminance behind the bound included. That quantization
    /// sets where stepping settles and hence which color it produces; the
    /// strategy usually overshoots the bound by up to a step.
    FixedStep,

    /// Binary-search Oklch lightness between the current value and the
    /// relevant extreme, with chroma and hue held fixed.
    ///
    /// Candidates must satisfy the bound and come within a small tolerance
    /// of its target, so the result stays as close to the original color as
    /// the bound allows.
    #[default]
    Bisection,
}

/// Shift the color's lightness until its luminance satisfies the bound.
///
/// A color that already satisfies the bound is returned unchanged. If the
/// bound cannot be met at all, the closest approximation found is returned
/// after a warning; this function never fails.
pub fn toward_bound(color: &Color, bound: LuminanceBound, strategy: Strategy) -> Color {
    if bound.is_satisfied_by(luminance(color)) {
        return color.clone();
    }

    match strategy {
        Strategy::FixedStep => fixed_step(color, bound),
        Strategy::Bisection => bisect(color, bound),
    }
}

/// Quantize a luminance to two decimals.
///
/// Fixed stepping reads every luminance at this precision, the background's
/// included; the solver derives the strategy's direction and bound from the
/// same quantized values.
pub(crate) fn coarse(luminance: f64) -> f64 {
    (luminance * 100.0).round() / 100.0
}

fn fixed_step(color: &Color, bound: LuminanceBound) -> Color {
    let mut current = color.clone();

    for _ in 0..MAX_STEPS {
        if bound.is_satisfied_by(coarse(luminance(&current))) {
            return current;
        }

        let (h, s, l, a) = current.to_hsla();
        current = match bound {
            LuminanceBound::AtLeast(_) if brightness(&current) < BRIGHTNESS_CEILING => {
                Color::from_hsla(h, s, (l + STEP).min(1.0), a)
            }
            LuminanceBound::AtMost(_) if brightness(&current) > BRIGHTNESS_FLOOR => {
                Color::from_hsla(h, s, (l - STEP).max(0.0), a)
            }
            // The brightness scale is exhausted; this is as close as
            // stepping gets.
            _ => return current,
        };
    }

    warn!("fixed-step adjustment stalled before meeting {bound:?}");
    current
}

fn bisect(color: &Color, bound: LuminanceBound) -> Color {
    let oklch = Oklch::<f64>::from_color(Srgb::new(color.r, color.g, color.b));
    let rebuild = |lightness: f64| from_oklch(lightness, oklch.chroma, oklch.hue, color.a);

    let (mut lo, mut hi, extreme) = match bound {
        LuminanceBound::AtLeast(_) => (oklch.l, 1.0, 1.0),
        LuminanceBound::AtMost(_) => (0.0, oklch.l, 0.0),
    };

    // When even the extreme falls short, say for a floor beyond the gamut's
    // luminance at this hue and chroma, the extreme is the closest
    // approximation there is.
    let mut closest = rebuild(extreme);
    if !bound.is_satisfied_by(luminance(&closest)) {
        warn!("{bound:?} is unreachable along the lightness axis");
        return closest;
    }

    for _ in 0..MAX_ROUNDS {
        let midpoint = 0.5 * (lo + hi);
        let candidate = rebuild(midpoint);
        let candidate_luminance = luminance(&candidate);

        if bound.is_satisfied_by(candidate_luminance) {
            if (candidate_luminance - bound.target()).abs() <= TOLERANCE {
                return candidate;
            }
            closest = candidate;
            match bound {
                LuminanceBound::AtLeast(_) => hi = midpoint,
                LuminanceBound::AtMost(_) => lo = midpoint,
            }
        } else {
            match bound {
                LuminanceBound::AtLeast(_) => lo = midpoint,
                LuminanceBound::AtMost(_) => hi = midpoint,
            }
        }
    }

    warn!("bisection hit its iteration ceiling for {bound:?}");
    closest
}

fn from_oklch(lightness: f64, chroma: f64, hue: OklabHue<f64>, alpha: f64) -> Color {
    let srgb = Srgb::<f64>::from_color(Oklch::new(lightness, chroma, hue)).clamp();
    Color::new(srgb.red, srgb.green, srgb.blue, alpha)
}

// ====================================================================================================================
