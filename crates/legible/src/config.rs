//! The engine's configuration surface.

use csscolorparser::Color;

use crate::converge::Strategy;
use crate::error::ConfigError;

/// The configuration for contrast enforcement.
///
/// The default configuration targets the WCAG AA ratio of 4.5, preserves the
/// original color's lighter/darker relationship to its background where
/// possible, and converges by bisection.
///
/// Options are assembled by modifying the default:
///
/// ```
/// # use legible::{Options, Strategy};
/// let options = Options::default()
///     .with_required_contrast_ratio(7.0)
///     .with_flip_black_and_white(true);
/// assert_eq!(options.required_contrast_ratio, 7.0);
/// assert_eq!(options.strategy, Strategy::Bisection);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// The contrast ratio every adjusted color must reach against its
    /// effective background. Must be a finite number of at least 1.
    pub required_contrast_ratio: f64,

    /// Replace exact black with white, and exact white with black, when an
    /// adjustment points the other way, instead of converging gradually.
    pub flip_black_and_white: bool,

    /// Keep a color on its original side of the background when the
    /// required ratio is reachable there.
    pub preserve_contrast_direction: bool,

    /// A color that replaces background resolution entirely. When set, the
    /// ancestor walk is skipped and every node is adjusted against this
    /// color.
    pub background_override: Option<String>,

    /// The convergence strategy.
    pub strategy: Strategy,

    /// An opaque token that never participates in any computation. Hosts
    /// change it to signal, through [`Options::requires_reevaluation`], that
    /// a subtree should be re-enforced even though no other option changed.
    pub reevaluation_key: String,
}

impl Options {
    /// Set the required contrast ratio.
    pub fn with_required_contrast_ratio(mut self, ratio: f64) -> Self {
        self.required_contrast_ratio = ratio;
        self
    }

    /// Set whether exact black and white flip to their opposite.
    pub fn with_flip_black_and_white(mut self, flip: bool) -> Self {
        self.flip_black_and_white = flip;
        self
    }

    /// Set whether the original's lighter/darker relationship is preserved
    /// when possible.
    pub fn with_preserve_contrast_direction(mut self, preserve: bool) -> Self {
        self.preserve_contrast_direction = preserve;
        self
    }

    /// Set the background override.
    pub fn with_background_override(mut self, background: impl Into<String>) -> Self {
        self.background_override = Some(background.into());
        self
    }

    /// Set the convergence strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the re-evaluation key.
    pub fn with_reevaluation_key(mut self, key: impl Into<String>) -> Self {
        self.reevaluation_key = key.into();
        self
    }

    /// Validate this configuration.
    ///
    /// The required ratio must be a finite number of at least 1, and the
    /// background override, if any, must parse as a color.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_ratio()?;
        self.parse_background_override()?;
        Ok(())
    }

    pub(crate) fn check_ratio(&self) -> Result<(), ConfigError> {
        if !self.required_contrast_ratio.is_finite() || self.required_contrast_ratio < 1.0 {
            return Err(ConfigError::ContrastRatioOutOfRange(
                self.required_contrast_ratio,
            ));
        }

        Ok(())
    }

    pub(crate) fn parse_background_override(&self) -> Result<Option<Color>, ConfigError> {
        match &self.background_override {
            Some(value) => value.parse().map(Some).map_err(|error| {
                ConfigError::MalformedBackgroundOverride {
                    value: value.clone(),
                    error,
                }
            }),
            None => Ok(None),
        }
    }

    /// Determine whether a change from `previous` to this configuration
    /// warrants re-enforcing a subtree.
    ///
    /// Any difference counts, including one confined to the otherwise inert
    /// [`reevaluation_key`](Options::reevaluation_key).
    pub fn requires_reevaluation(&self, previous: &Options) -> bool {
        self != previous
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            required_contrast_ratio: 4.5,
            flip_black_and_white: false,
            preserve_contrast_direction: true,
            background_override: None,
            strategy: Strategy::default(),
            reevaluation_key: String::from("default"),
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Options;
    use crate::error::ConfigError;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.required_contrast_ratio, 4.5);
        assert!(!options.flip_black_and_white);
        assert!(options.preserve_contrast_direction);
        assert!(options.background_override.is_none());
        assert_eq!(options.reevaluation_key, "default");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_ratio_validation() {
        let too_small = Options::default().with_required_contrast_ratio(0.5);
        assert!(matches!(
            too_small.validate(),
            Err(ConfigError::ContrastRatioOutOfRange(_))
        ));

        let not_a_number = Options::default().with_required_contrast_ratio(f64::NAN);
        assert!(not_a_number.validate().is_err());

        let just_right = Options::default().with_required_contrast_ratio(1.0);
        assert!(just_right.validate().is_ok());
    }

    #[test]
    fn test_override_validation() {
        let valid = Options::default().with_background_override("rgb(255, 255, 255)");
        assert!(valid.validate().is_ok());

        let invalid = Options::default().with_background_override("not-a-color");
        assert!(matches!(
            invalid.validate(),
            Err(ConfigError::MalformedBackgroundOverride { .. })
        ));
    }

    #[test]
    fn test_override_parses_into_a_color() {
        let absent = Options::default();
        assert!(matches!(absent.parse_background_override(), Ok(None)));

        let present = Options::default().with_background_override("rgb(25, 25, 25)");
        let parsed = present
            .parse_background_override()
            .expect("valid override")
            .expect("override present");
        assert_eq!(parsed.to_rgba8(), [25, 25, 25, 255]);
    }

    #[test]
    fn test_requires_reevaluation() {
        let options = Options::default();
        assert!(!options.requires_reevaluation(&options.clone()));

        let new_key = options.clone().with_reevaluation_key("high-contrast");
        assert!(new_key.requires_reevaluation(&options));

        let new_ratio = options.clone().with_required_contrast_ratio(7.0);
        assert!(new_ratio.requires_reevaluation(&options));
    }
}
