//! # Legible
//!
//! Legible makes foreground colors readable again. Given a foreground color
//! and whatever is visually behind it, the crate computes a replacement
//! color that clears a required WCAG contrast ratio while staying as close
//! to the original as it can, preserving hue and chroma and, where
//! reachable, the original's lighter-or-darker relationship to its
//! background.
//!
//!
//! ## Overview
//!
//! The crate's main abstractions are:
//!
//!   * [`adjust`] and [`adjust_css`] implement the **contrast solver**, a
//!     pure function from background, foreground, and [`Options`] to an
//!     adjusted color. Helpers [`luminance`], [`contrast_ratio`], and
//!     [`brightness`] expose the underlying photometry.
//!   * [`effective_background`] implements **background compositing**,
//!     flattening a stack of possibly translucent layers into the one opaque
//!     color a foreground is actually read against.
//!   * [`direction_for`] and [`luminance_bound`] turn a required ratio into
//!     a **one-sided luminance bound**, deciding whether a color must
//!     lighten or darken and how far.
//!   * [`Strategy`] selects between two **convergence procedures**, fixed
//!     lightness steps in HSL and bisection over Oklch lightness. Both
//!     terminate after a bounded number of rounds.
//!   * [`Enforcer`] walks any tree implementing [`StyledNode`] and rewrites
//!     every colored facet that falls short of the ratio.
//!
//! Colors are [`csscolorparser::Color`] values throughout, re-exported as
//! [`Color`].
//!
//!
//! ## Example
//!
//! ```
//! use legible::{adjust, contrast_ratio, Color, Options};
//!
//! # fn main() -> Result<(), csscolorparser::ParseColorError> {
//! let background: Color = "#191919".parse()?;
//! let foreground: Color = "#123456".parse()?;
//! assert!(contrast_ratio(&foreground, &background) < 4.5);
//!
//! let adjusted = adjust(&background, &foreground, &Options::default());
//! assert!(contrast_ratio(&adjusted, &background) >= 4.5);
//! # Ok(())
//! # }
//! ```

mod background;
mod color;
mod config;
mod converge;
mod enforce;
mod node;
mod solver;
mod target;

pub mod error;

pub use csscolorparser::Color;

pub use background::effective_background;
pub use color::{brightness, contrast_ratio, luminance};
pub use config::Options;
pub use converge::{toward_bound, Strategy};
pub use enforce::Enforcer;
pub use node::{StyleProperty, StyledNode};
pub use solver::{adjust, adjust_css};
pub use target::{direction_for, luminance_bound, Direction, LuminanceBound, DIRECTION_THRESHOLD};
