//! Utility module with this crate's errors.

/// An invalid configuration.
///
/// The engine validates its configuration once, up front, when an
/// [`Enforcer`](crate::Enforcer) is created. Everything after that point is
/// fail-soft: malformed colors encountered during a pass are left alone
/// rather than reported.
#[derive(Debug)]
pub enum ConfigError {
    /// A required contrast ratio below 1 or not a number. Ratios less than 1
    /// would invert the lighter/darker roles in the contrast definition and
    /// have no meaningful solution.
    ContrastRatioOutOfRange(f64),

    /// A background override that does not parse as a color.
    MalformedBackgroundOverride {
        /// The rejected override value.
        value: String,
        /// The parse failure.
        error: csscolorparser::ParseColorError,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ContrastRatioOutOfRange(ratio) => f.write_fmt(format_args!(
                "required contrast ratio {} is not a finite number >= 1",
                ratio
            )),
            Self::MalformedBackgroundOverride { value, .. } => f.write_fmt(format_args!(
                "background override {:?} is not a valid color",
                value
            )),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ContrastRatioOutOfRange(_) => None,
            Self::MalformedBackgroundOverride { error, .. } => Some(error),
        }
    }
}
