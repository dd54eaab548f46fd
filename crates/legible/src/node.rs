//! The node abstraction for trees of styled content.
//!
//! The enforcement engine does not know what a document looks like. It walks
//! anything that implements [`StyledNode`], which exposes just the colored
//! facets the engine rewrites plus enough structure to descend into children.
//! Hosts adapt their own tree, be it a DOM or a retained widget tree, behind
//! this trait; the engine never holds references into it beyond a single
//! visit.

/// A style property carrying a color the engine enforces.
///
/// These are the facets read from and written back to a node's inline style,
/// as opposed to the presentation attributes in [`COLOR_ATTRIBUTES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// The foreground text color.
    Color,
    /// The interior fill of a shape.
    Fill,
    /// The outline of a shape.
    Stroke,
}

/// All style properties, in enforcement order.
pub(crate) const STYLE_PROPERTIES: [StyleProperty; 3] = [
    StyleProperty::Color,
    StyleProperty::Fill,
    StyleProperty::Stroke,
];

/// The presentation attributes carrying colors the engine enforces.
pub(crate) const COLOR_ATTRIBUTES: [&str; 3] = ["fill", "stroke", "stop-color"];

/// A node in a tree of styled content.
///
/// Attribute and style accessors return `None` when the facet is absent, and
/// the engine leaves absent facets absent. `computed_background` is the
/// node's own background layer only; the engine accumulates the stack of
/// ancestor layers itself while descending.
pub trait StyledNode {
    /// The node's own background color, as written in its styling, or `None`
    /// if the node paints no background of its own.
    fn computed_background(&self) -> Option<String>;

    /// Read a presentation attribute.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Write a presentation attribute.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Read a color-valued style property.
    fn computed_style(&self, property: StyleProperty) -> Option<String>;

    /// Write a color-valued style property.
    fn set_style(&mut self, property: StyleProperty, value: &str);

    /// Whether this node opted out of enforcement. An opted-out node keeps
    /// its own facets untouched, though its children are still visited.
    fn opted_out(&self) -> bool {
        false
    }

    /// The number of children.
    fn child_count(&self) -> usize;

    /// A mutable borrow of the child at `index`.
    fn child_mut(&mut self, index: usize) -> Option<&mut Self>
    where
        Self: Sized;
}
