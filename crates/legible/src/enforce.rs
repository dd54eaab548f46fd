//! Tree-wide contrast enforcement.
//!
//! The [`Enforcer`] walks a styled tree in document order and rewrites every
//! colored facet that falls short of the required contrast ratio against its
//! effective background. Enforcement is explicit: the host calls
//! [`reevaluate`](Enforcer::reevaluate) whenever the tree or the
//! configuration changed, typically keyed on
//! [`requires_reevaluation`](crate::Options::requires_reevaluation).

use csscolorparser::Color;

use crate::background::effective_background;
use crate::config::Options;
use crate::error::ConfigError;
use crate::node::{StyledNode, COLOR_ATTRIBUTES, STYLE_PROPERTIES};
use crate::solver::adjust_css;

/// The contrast enforcement engine for styled trees.
///
/// An enforcer is cheap to construct and holds no references into any tree.
/// Construction validates the configuration once, so the walk itself cannot
/// fail.
#[derive(Clone, Debug)]
pub struct Enforcer {
    options: Options,
    override_background: Option<Color>,
}

impl Enforcer {
    /// Create a new enforcer with the given configuration.
    ///
    /// # Errors
    ///
    /// Fails if the configuration does not validate, i.e., the required
    /// ratio is below 1 or not finite, or the background override does not
    /// parse as a color.
    pub fn new(options: Options) -> Result<Self, ConfigError> {
        options.check_ratio()?;
        let override_background = options.parse_background_override()?;

        Ok(Self {
            options,
            override_background,
        })
    }

    /// Reevaluate the tree rooted at `root`, rewriting every colored facet
    /// that does not clear the required contrast ratio.
    ///
    /// The walk is a pre-order descent: each node's facets are enforced
    /// against the background accumulated from its ancestors within the
    /// tree (or the configured override), then the node's own background
    /// layer is pushed for its children. Backgrounds painted by ancestors
    /// *above* `root` are invisible to the walk; use
    /// [`with_background_override`](Options::with_background_override) to
    /// account for them.
    pub fn reevaluate<N: StyledNode>(&self, root: &mut N) {
        let mut layers = Vec::new();
        self.visit(root, &mut layers);
    }

    fn visit<N: StyledNode>(&self, node: &mut N, layers: &mut Vec<Color>) {
        if !node.opted_out() {
            self.enforce_facets(node, layers);
        }

        let pushed = match node.computed_background().and_then(|css| css.parse().ok()) {
            Some(background) => {
                layers.push(background);
                true
            }
            None => false,
        };

        for index in 0..node.child_count() {
            if let Some(child) = node.child_mut(index) {
                self.visit(child, layers);
            }
        }

        if pushed {
            layers.pop();
        }
    }

    fn enforce_facets<N: StyledNode>(&self, node: &mut N, layers: &[Color]) {
        // Layers accumulate root-first; compositing wants them
        // nearest-ancestor-first.
        let background = self
            .override_background
            .clone()
            .or_else(|| effective_background(layers.iter().rev().cloned()));
        let Some(background) = background else {
            // With no opaque backdrop anywhere, contrast is undefined and
            // the node is left alone.
            return;
        };

        for name in COLOR_ATTRIBUTES {
            if let Some(value) = node.attribute(name) {
                let adjusted = adjust_css(&background, &value, &self.options);
                if adjusted != value {
                    node.set_attribute(name, &adjusted);
                }
            }
        }
        for property in STYLE_PROPERTIES {
            if let Some(value) = node.computed_style(property) {
                let adjusted = adjust_css(&background, &value, &self.options);
                if adjusted != value {
                    node.set_style(property, &adjusted);
                }
            }
        }
    }
}

// ====================================================================================================================
