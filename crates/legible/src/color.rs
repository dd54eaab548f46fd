//! Scalar measures over the parsed color primitive.
//!
//! The crate consumes [`csscolorparser::Color`] as its color value type and
//! layers the handful of quantities the contrast engine needs on top of it:
//! WCAG relative luminance, contrast ratio, YIQ brightness, and one
//! "color over base" compositing step.

use csscolorparser::Color;

/// The luminance offset from the WCAG contrast ratio definition,
/// (L1 + 0.05) / (L2 + 0.05).
pub const LUMINANCE_OFFSET: f64 = 0.05;

/// Linearize one gamma-encoded sRGB coordinate.
fn linearize(value: f64) -> f64 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the WCAG relative luminance of a color.
///
/// The result has unit range, with 0 for pure black and 1 for pure white.
/// The alpha channel does not participate; callers composite translucent
/// colors first (see [`effective_background`](crate::effective_background)).
pub fn luminance(color: &Color) -> f64 {
    linearize(color.r).mul_add(
        0.2126,
        linearize(color.g).mul_add(0.7152, linearize(color.b) * 0.0722),
    )
}

/// Compute the WCAG contrast ratio between two colors.
///
/// The result is in `1.0..=21.0` and independent of argument order.
pub fn contrast_ratio(color: &Color, other: &Color) -> f64 {
    contrast_from_luminances(luminance(color), luminance(other))
}

/// Compute the contrast ratio from two relative luminances.
pub(crate) fn contrast_from_luminances(luminance1: f64, luminance2: f64) -> f64 {
    let (lighter, darker) = if luminance1 >= luminance2 {
        (luminance1, luminance2)
    } else {
        (luminance2, luminance1)
    };

    (lighter + LUMINANCE_OFFSET) / (darker + LUMINANCE_OFFSET)
}

/// Compute the perceived brightness of a color on the YIQ scale.
///
/// The result has unit range. Unlike [`luminance`], this measure is a plain
/// weighted sum of the gamma-encoded coordinates. The converger uses it to
/// detect that a color has run out of headroom, and the solver uses its
/// extremes to recognize exact black and white.
pub fn brightness(color: &Color) -> f64 {
    color.r.mul_add(0.299, color.g.mul_add(0.587, color.b * 0.114))
}

/// Determine whether a color is exactly pure black, ignoring alpha.
pub fn is_black(color: &Color) -> bool {
    let [r, g, b, _] = color.to_rgba8();
    r == 0 && g == 0 && b == 0
}

/// Determine whether a color is exactly pure white, ignoring alpha.
pub fn is_white(color: &Color) -> bool {
    let [r, g, b, _] = color.to_rgba8();
    r == 255 && g == 255 && b == 255
}

/// Paint `layer` over the fully opaque `base`.
///
/// This is one step of back-to-front compositing: each coordinate is blended
/// with the layer's own alpha as ratio. The result is opaque.
pub(crate) fn over(layer: &Color, base: &Color) -> Color {
    let blend = |top: f64, bottom: f64| layer.a.mul_add(top - bottom, bottom);

    Color::new(
        blend(layer.r, base.r),
        blend(layer.g, base.g),
        blend(layer.b, base.b),
        1.0,
    )
}

// ====================================================================================================================
