//! Resolution of the effective background behind a node.
//!
//! A node's backdrop is rarely a single color: ancestors stack translucent
//! background layers on top of each other. This module folds such a stack
//! into the one opaque-equivalent color that the contrast computation needs.

use csscolorparser::Color;

use crate::color;

/// Composite a stack of background layers into one effective color.
///
/// The iterator yields ancestor background layers nearest-ancestor-first,
/// i.e. in the order an upward walk from the node encounters them. Layers
/// past the first fully opaque one cannot contribute and are ignored. The
/// remaining stack is painted back to front, blending each more nested layer
/// over the result with that layer's own alpha as ratio; zero-alpha layers
/// are skipped.
///
/// Returns `None` for an empty stack, which callers treat as "background
/// unknown" and which suppresses any adjustment.
///
/// ```
/// # use csscolorparser::Color;
/// # use legible::effective_background;
/// # fn main() -> Result<(), csscolorparser::ParseColorError> {
/// let veil: Color = "rgba(255, 255, 255, 0.5)".parse()?;
/// let base: Color = "rgb(0, 0, 0)".parse()?;
///
/// let effective = effective_background([veil, base]).unwrap();
/// assert_eq!(effective.to_rgba8(), [128, 128, 128, 255]);
///
/// assert!(effective_background([]).is_none());
/// # Ok(())
/// # }
/// ```
pub fn effective_background<I>(layers: I) -> Option<Color>
where
    I: IntoIterator<Item = Color>,
{
    let mut stack = Vec::new();
    for layer in layers {
        let opaque = layer.a >= 1.0;
        stack.push(layer);
        if opaque {
            break;
        }
    }

    let mut rear_to_front = stack.into_iter().rev();
    let mut effective = rear_to_front.next()?;
    for layer in rear_to_front {
        if layer.a > 0.0 {
            effective = color::over(&layer, &effective);
        }
    }

    effective.a = 1.0;
    Some(effective)
}

// ====================================================================================================================
