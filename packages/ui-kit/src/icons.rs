//! Icon glyphs and icon decoration.
//!
//! Icons are plain descriptors (glyph name plus optional classes) that
//! render to an `svg` element. Components never clone foreign nodes to
//! restyle them; they pass an [`IconSlot`] to [`decorate_icon`], which
//! returns the finished node or nothing.

use crate::class_names::cn;
use crate::dom::{Element, Node};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Sizing applied to every decorated icon.
pub const ICON_CLASSES: &str = "w-4 h-4";

/// Stroke paths for the built-in glyphs, drawn on a 24x24 grid.
const GLYPHS: &[(&str, &[&str])] = &[
    ("arrow-right", &["M5 12h14", "m12 5 7 7-7 7"]),
    ("arrow-left", &["m12 19-7-7 7-7", "M19 12H5"]),
    ("loader-2", &["M21 12a9 9 0 1 1-6.219-8.56"]),
];

/// An icon descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    /// Glyph name, e.g. `arrow-right`
    pub name: String,
    /// Extra classes supplied by the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl Icon {
    /// Look up a built-in glyph by name.
    pub fn from_name(name: &str) -> Result<Self> {
        if glyph_paths(name).is_none() {
            return Err(Error::UnknownIcon(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            class: None,
        })
    }

    pub fn arrow_right() -> Self {
        Self::builtin("arrow-right")
    }

    pub fn arrow_left() -> Self {
        Self::builtin("arrow-left")
    }

    pub fn loader() -> Self {
        Self::builtin("loader-2")
    }

    fn builtin(name: &str) -> Self {
        Self {
            name: name.to_string(),
            class: None,
        }
    }

    /// Names of all built-in glyphs.
    pub fn names() -> impl Iterator<Item = &'static str> {
        GLYPHS.iter().map(|(name, _)| *name)
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    /// Render the glyph as an `svg` element.
    pub fn render(&self) -> Element {
        let paths = glyph_paths(&self.name).unwrap_or(&[]);
        let base = format!("lucide lucide-{}", self.name);

        Element::new("svg")
            .class(cn([Some(base.as_str()), self.class.as_deref()]))
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", "24")
            .attr("height", "24")
            .attr("viewBox", "0 0 24 24")
            .attr("fill", "none")
            .attr("stroke", "currentColor")
            .attr("stroke-width", "2")
            .attr("stroke-linecap", "round")
            .attr("stroke-linejoin", "round")
            .children(
                paths
                    .iter()
                    .map(|d| Node::Element(Element::new("path").attr("d", *d))),
            )
    }
}

fn glyph_paths(name: &str) -> Option<&'static [&'static str]> {
    GLYPHS
        .iter()
        .find(|(glyph, _)| *glyph == name)
        .map(|(_, paths)| *paths)
}

/// Whatever a caller passed where an icon was expected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IconSlot {
    /// A renderable icon
    Element(Icon),
    /// Plain text, which is not an element and is never rendered as an icon
    Text(String),
    #[default]
    Empty,
}

impl IconSlot {
    pub fn is_element(&self) -> bool {
        matches!(self, IconSlot::Element(_))
    }
}

impl From<Icon> for IconSlot {
    fn from(icon: Icon) -> Self {
        IconSlot::Element(icon)
    }
}

impl From<Option<Icon>> for IconSlot {
    fn from(icon: Option<Icon>) -> Self {
        icon.map_or(IconSlot::Empty, IconSlot::Element)
    }
}

impl From<&str> for IconSlot {
    fn from(text: &str) -> Self {
        IconSlot::Text(text.to_string())
    }
}

impl From<String> for IconSlot {
    fn from(text: String) -> Self {
        IconSlot::Text(text)
    }
}

/// Produce the render node for an icon slot.
///
/// Renderable icons get [`ICON_CLASSES`] merged ahead of their own classes
/// and are hidden from assistive technology. Anything else yields `None`.
pub fn decorate_icon(slot: &IconSlot) -> Option<Node> {
    let IconSlot::Element(icon) = slot else {
        if let IconSlot::Text(text) = slot {
            tracing::trace!("Ignoring non-element icon {:?}", text);
        }
        return None;
    };

    let mut element = icon.render();
    element.classes = cn([ICON_CLASSES, element.classes.as_str()]);
    Some(Node::Element(element.attr("aria-hidden", "true")))
}
