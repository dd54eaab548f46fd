//! The contrast solver.
//!
//! This module ties direction selection, the luminance bound, and lightness
//! convergence into one pure function from a background, an original color,
//! and a configuration to an adjusted color.

use csscolorparser::Color;

use crate::color::{contrast_from_luminances, is_black, is_white, luminance};
use crate::config::Options;
use crate::converge::{coarse, toward_bound, Strategy};
use crate::target::{direction_for, luminance_bound, LuminanceBound};

/// Adjust a color until it clears the required contrast ratio against the
/// background.
///
/// A color that already clears the ratio is returned unchanged, which makes
/// the function idempotent. Otherwise the color moves along its lightness
/// axis, toward white or black per the direction heuristic, until its
/// luminance satisfies the bound derived from the ratio, clamped at the
/// extremes when the ratio is out of reach. With
/// [`flip_black_and_white`](Options::flip_black_and_white) set, exact black
/// asked to lighten becomes pure white outright, and exact white asked to
/// darken becomes pure black.
///
/// This is a pure function: no state, no side effects beyond the returned
/// color.
///
/// ```
/// # use legible::{adjust, contrast_ratio, Color, Options};
/// # fn main() -> Result<(), csscolorparser::ParseColorError> {
/// let background: Color = "rgb(25, 25, 25)".parse()?;
/// let original: Color = "#123456".parse()?;
///
/// let adjusted = adjust(&background, &original, &Options::default());
/// assert!(contrast_ratio(&adjusted, &background) >= 4.5);
/// # Ok(())
/// # }
/// ```
pub fn adjust(background: &Color, original: &Color, options: &Options) -> Color {
    let background_luminance = luminance(background);
    let original_luminance = luminance(original);

    if contrast_from_luminances(background_luminance, original_luminance)
        >= options.required_contrast_ratio
    {
        return original.clone();
    }

    // Fixed stepping reads luminances at two-decimal precision; its
    // direction and bound derive from the same quantized values.
    let (background_luminance, original_luminance) = match options.strategy {
        Strategy::FixedStep => (coarse(background_luminance), coarse(original_luminance)),
        Strategy::Bisection => (background_luminance, original_luminance),
    };

    let direction = direction_for(
        background_luminance,
        original_luminance,
        options.required_contrast_ratio,
        options.preserve_contrast_direction,
    );
    let bound = luminance_bound(background_luminance, options.required_contrast_ratio, direction);

    if options.flip_black_and_white {
        match bound {
            LuminanceBound::AtLeast(_) if is_black(original) => {
                return Color::new(1.0, 1.0, 1.0, 1.0);
            }
            LuminanceBound::AtMost(_) if is_white(original) => {
                return Color::new(0.0, 0.0, 0.0, 1.0);
            }
            _ => {}
        }
    }

    toward_bound(original, bound, options.strategy)
}

/// Adjust a color given as a string, failing soft.
///
/// The original string is returned verbatim when it does not parse as a
/// color and when no adjustment is needed; otherwise the adjusted color is
/// rendered as a hex string.
pub fn adjust_css(background: &Color, original: &str, options: &Options) -> String {
    match original.parse::<Color>() {
        Ok(color) => {
            let adjusted = adjust(background, &color, options);
            if adjusted.to_rgba8() == color.to_rgba8() {
                original.to_string()
            } else {
                adjusted.to_hex_string()
            }
        }
        Err(_) => original.to_string(),
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{adjust, adjust_css};
    use crate::color::{contrast_ratio, luminance};
    use crate::config::Options;
    use crate::converge::Strategy;
    use csscolorparser::Color;
    use proptest::prelude::*;

    fn parse(css: &str) -> Color {
        css.parse().expect("test colors are well-formed")
    }

    fn fixed() -> Options {
        Options::default().with_strategy(Strategy::FixedStep)
    }

    #[test]
    fn test_black_flips_to_white_on_dark_background() {
        let background = parse("rgb(25, 25, 25)");
        let original = parse("rgb(0, 0, 0)");
        for options in [
            Options::default().with_flip_black_and_white(true),
            fixed().with_flip_black_and_white(true),
        ] {
            let adjusted = adjust(&background, &original, &options);
            assert_eq!(adjusted.to_rgba8(), [255, 255, 255, 255]);
        }
    }

    #[test]
    fn test_compliant_color_is_untouched() {
        let background = parse("rgb(230, 230, 230)");
        let original = parse("rgb(0, 0, 0)");
        let options = Options::default().with_flip_black_and_white(true);

        let adjusted = adjust(&background, &original, &options);
        assert_eq!(adjusted.to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(
            adjust_css(&background, "rgb(0, 0, 0)", &options),
            "rgb(0, 0, 0)"
        );
    }

    #[test]
    fn test_preserved_lighter_direction() {
        // The original sits barely above its background; at ratio 2 white is
        // reachable, so the adjustment lightens.
        let background = parse("rgb(150, 150, 150)");
        let original = parse("rgb(151, 151, 151)");
        let options = fixed().with_required_contrast_ratio(2.0);

        let adjusted = adjust(&background, &original, &options);
        assert_eq!(adjusted.to_rgba8(), [212, 212, 212, 255]);

        // Bisection settles on the same gray for this bound.
        let options = Options::default().with_required_contrast_ratio(2.0);
        let adjusted = adjust(&background, &original, &options);
        assert_eq!(adjusted.to_rgba8(), [212, 212, 212, 255]);
    }

    #[test]
    fn test_unpreserved_direction_follows_the_background() {
        // Without preservation, a 150-gray background defaults to darkening.
        let background = parse("rgb(150, 150, 150)");
        let original = parse("rgb(151, 151, 151)");

        let options = fixed()
            .with_required_contrast_ratio(2.0)
            .with_preserve_contrast_direction(false);
        let adjusted = adjust(&background, &original, &options);
        assert_eq!(adjusted.to_rgba8(), [97, 97, 97, 255]);

        // Bisection stops right at the bound instead of overshooting past it.
        let options = Options::default()
            .with_required_contrast_ratio(2.0)
            .with_preserve_contrast_direction(false);
        let adjusted = adjust(&background, &original, &options);
        assert_eq!(adjusted.to_rgba8(), [100, 100, 100, 255]);
    }

    #[test]
    fn test_direction_switches_when_preservation_is_unreachable() {
        // At ratio 4.5, lightening to pure white cannot satisfy the ratio
        // against a 150-gray, so the default direction (darken) applies.
        let background = parse("rgb(150, 150, 150)");
        let original = parse("rgb(151, 151, 151)");

        let adjusted = adjust(&background, &original, &fixed());
        assert_eq!(adjusted.to_rgba8(), [41, 41, 41, 255]);

        let adjusted = adjust(&background, &original, &Options::default());
        let [r, g, b, _] = adjusted.to_rgba8();
        assert_eq!((r, g), (g, b), "expected a uniform gray");
        assert!(contrast_ratio(&adjusted, &background) >= 4.5 - 1e-9);
        assert!(luminance(&adjusted) < luminance(&original));
    }

    #[test]
    fn test_preserved_darker_direction() {
        // Darker original on a darker midtone: black still clears ratio 2,
        // so the adjustment darkens.
        let background = parse("rgb(100, 100, 100)");
        let original = parse("rgb(99, 99, 99)");

        let options = fixed().with_required_contrast_ratio(2.0);
        let adjusted = adjust(&background, &original, &options);
        assert_eq!(adjusted.to_rgba8(), [51, 51, 51, 255]);

        // Without preservation the 100-gray background defaults to
        // lightening instead.
        let options = options.with_preserve_contrast_direction(false);
        let adjusted = adjust(&background, &original, &options);
        assert_eq!(adjusted.to_rgba8(), [153, 153, 153, 255]);
    }

    #[test]
    fn test_direction_switches_to_lighter_when_darkening_is_unreachable() {
        // At ratio 4.5, black cannot satisfy the ratio against a 100-gray,
        // and the dark background defaults to lightening.
        let background = parse("rgb(100, 100, 100)");
        let original = parse("rgb(99, 99, 99)");

        let adjusted = adjust(&background, &original, &fixed());
        assert_eq!(adjusted.to_rgba8(), [227, 227, 227, 255]);
    }

    #[test]
    fn test_lightening_from_a_dark_background() {
        let background = parse("rgb(25, 25, 25)");
        let original = parse("rgb(30, 30, 30)");

        let adjusted = adjust(&background, &original, &fixed());
        assert_eq!(adjusted.to_rgba8(), [132, 132, 132, 255]);
    }

    #[test]
    fn test_unparseable_color_passes_through() {
        let background = parse("rgb(25, 25, 25)");
        assert_eq!(
            adjust_css(&background, "definitely-not-a-color", &Options::default()),
            "definitely-not-a-color"
        );
    }

    #[test]
    fn test_adjusted_color_serializes_as_hex() {
        let background = parse("rgb(25, 25, 25)");
        let options = Options::default().with_flip_black_and_white(true);
        assert_eq!(adjust_css(&background, "rgb(0, 0, 0)", &options), "#ffffff");
    }

    proptest! {
        /// Already-compliant pairs always come back unchanged.
        #[test]
        fn prop_idempotent_when_compliant(
            fg in proptest::array::uniform3(0u8..=255),
            bg in proptest::array::uniform3(0u8..=255),
            fraction in 0.0..=1.0f64,
        ) {
            let foreground = Color::from_rgba8(fg[0], fg[1], fg[2], 255);
            let background = Color::from_rgba8(bg[0], bg[1], bg[2], 255);

            // Any ratio up to the pair's own contrast is already met.
            let available = contrast_ratio(&background, &foreground);
            let ratio = fraction.mul_add(available - 1.0, 1.0);

            let options = Options::default().with_required_contrast_ratio(ratio);
            let adjusted = adjust(&background, &foreground, &options);
            prop_assert_eq!(adjusted.to_rgba8(), foreground.to_rgba8());
        }

        /// Adjustment always yields in-range coordinates and, without
        /// flipping, keeps the original's alpha.
        #[test]
        fn prop_output_is_well_formed(
            fg in proptest::array::uniform3(0u8..=255),
            bg in proptest::array::uniform3(0u8..=255),
            alpha in 0.0..=1.0f64,
            ratio in 1.0..10.0f64,
            strategy in prop_oneof![Just(Strategy::FixedStep), Just(Strategy::Bisection)],
        ) {
            let foreground = Color::new(
                f64::from(fg[0]) / 255.0,
                f64::from(fg[1]) / 255.0,
                f64::from(fg[2]) / 255.0,
                alpha,
            );
            let background = Color::from_rgba8(bg[0], bg[1], bg[2], 255);
            let options = Options::default()
                .with_required_contrast_ratio(ratio)
                .with_strategy(strategy);

            let adjusted = adjust(&background, &foreground, &options);
            prop_assert!((0.0..=1.0).contains(&adjusted.r));
            prop_assert!((0.0..=1.0).contains(&adjusted.g));
            prop_assert!((0.0..=1.0).contains(&adjusted.b));
            prop_assert!((adjusted.a - alpha).abs() < 1e-9);
        }

        /// For a fixed direction and background, a higher required ratio
        /// never shrinks the luminance shift.
        #[test]
        fn prop_shift_grows_with_ratio(
            fg in 0u8..=255,
            lower in 1.0..8.0f64,
            extra in 0.0..8.0f64,
        ) {
            let background = Color::from_rgba8(150, 150, 150, 255);
            let foreground = Color::from_rgba8(fg, fg, fg, 255);
            // Preservation off pins the direction to darken for this
            // background, independent of the ratio.
            let base = Options::default().with_preserve_contrast_direction(false);

            let shift = |ratio: f64| {
                let adjusted = adjust(&background, &foreground, &base.clone().with_required_contrast_ratio(ratio));
                (luminance(&adjusted) - luminance(&foreground)).abs()
            };

            prop_assert!(shift(lower + extra) + 2e-3 >= shift(lower));
        }
    }
}
