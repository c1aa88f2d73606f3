//! Button component
//!
//! Provides styled button variants and sizes with optional leading and
//! trailing icons.

use crate::class_names::ClassValue;
use crate::cn;
use crate::dom::{ClickEvent, ClickHandler, Element, Node};
use crate::icons::{decorate_icon, IconSlot};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Classes every button carries.
pub const BASE_CLASSES: &str = "inline-flex items-center justify-center rounded-full font-medium \
     transition-colors disabled:cursor-not-allowed disabled:pointer-events-none px-8 gap-2 py-1.5";

/// Attributes owned by dedicated props.
const RESERVED_ATTRIBUTES: &[&str] = &["class", "disabled"];

/// Button variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 3] = [Self::Primary, Self::Secondary, Self::Outline];

    pub fn classes(self) -> &'static [&'static str] {
        match self {
            Self::Primary => &[
                "bg-gradient-to-r",
                "from-pink-600",
                "to-cyan-700",
                "text-white",
                "hover:from-pink-500",
                "hover:to-cyan-600",
                "disabled:opacity-30",
            ],
            Self::Secondary => &[
                "bg-[#027582]",
                "text-white",
                "hover:bg-cyan-600",
                "disabled:opacity-30",
            ],
            Self::Outline => &[
                "border",
                "border-[#5F5F5E]",
                "text-[#5F5F5E]",
                "bg-white",
                "hover:bg-gray-100",
                "disabled:opacity-30",
            ],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| Error::UnknownVariant(s.to_string()))
    }
}

/// Button size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    Md,
    Lg,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [Self::Sm, Self::Md, Self::Lg];

    pub fn classes(self) -> &'static [&'static str] {
        match self {
            Self::Sm => &["px-3", "py-1.5", "text-base", "gap-1", "min-w-[147px]", "h-[32px]"],
            Self::Md => &[
                "px-4",
                "py-2",
                "text-base",
                "font-semibold",
                "gap-2",
                "min-w-[154px]",
                "h-[44px]",
                "leading-5",
            ],
            Self::Lg => &[
                "text-lg",
                "gap-2.5",
                "min-w-[260px]",
                "h-[56px]",
                "py-2",
                "px-6",
                "font-semibold",
                "leading-4",
            ],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| Error::UnknownSize(s.to_string()))
    }
}

/// Button component
#[derive(Clone, Default)]
pub struct Button {
    pub text: String,
    pub icon_left: IconSlot,
    pub icon_right: IconSlot,
    pub variant: ButtonVariant,
    /// No size classes are applied when unset
    pub size: Option<ButtonSize>,
    pub disabled: bool,
    pub on_click: Option<ClickHandler>,
    pub class_name: Option<String>,
    /// Extra native attributes, applied after the defaults
    pub attributes: Vec<(String, String)>,
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("text", &self.text)
            .field("icon_left", &self.icon_left)
            .field("icon_right", &self.icon_right)
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("disabled", &self.disabled)
            .field("on_click", &self.on_click.is_some())
            .field("class_name", &self.class_name)
            .field("attributes", &self.attributes)
            .finish()
    }
}

impl Button {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn primary(text: &str) -> Self {
        Self::new(text).variant(ButtonVariant::Primary)
    }

    pub fn secondary(text: &str) -> Self {
        Self::new(text).variant(ButtonVariant::Secondary)
    }

    pub fn outline(text: &str) -> Self {
        Self::new(text).variant(ButtonVariant::Outline)
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn icon_left(mut self, icon: impl Into<IconSlot>) -> Self {
        self.icon_left = icon.into();
        self
    }

    pub fn icon_right(mut self, icon: impl Into<IconSlot>) -> Self {
        self.icon_right = icon.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub fn class_name(mut self, class_name: &str) -> Self {
        self.class_name = Some(class_name.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    /// Merged class attribute: base, variant, size, then caller classes.
    pub fn class_string(&self) -> String {
        let variant = self.variant.classes().join(" ");
        let size = self.size.map(|size| size.classes().join(" "));

        cn!(
            BASE_CLASSES,
            variant.as_str(),
            ClassValue::from(size.as_deref()),
            &self.class_name,
        )
    }

    /// Render the button element.
    pub fn render(&self) -> Element {
        let mut element = Element::new("button")
            .class(self.class_string())
            .bool_attr("disabled", self.disabled)
            .on_click(self.on_click.clone());

        for (name, value) in &self.attributes {
            if RESERVED_ATTRIBUTES.contains(&name.as_str()) {
                tracing::debug!("Ignoring reserved button attribute {:?}", name);
                continue;
            }
            element = element.attr(name, value.as_str());
        }

        element
            .children(decorate_icon(&self.icon_left))
            .child(Element::new("span").child(Node::text(self.text.as_str())))
            .children(decorate_icon(&self.icon_right))
    }
}
