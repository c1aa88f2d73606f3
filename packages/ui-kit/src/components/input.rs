//! Input component for text entry
//!
//! Provides a text input with placeholder support.

use crate::cn;
use crate::dom::Element;

const INPUT_CLASSES: &str = "flex h-10 w-full rounded-md border border-[#5F5F5E] bg-white px-3 py-2 \
     text-base placeholder:text-gray-400 disabled:cursor-not-allowed disabled:opacity-30";

/// Text input component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    pub value: String,
    pub placeholder: String,
    pub disabled: bool,
    pub class_name: Option<String>,
}

impl Input {
    pub fn new(placeholder: &str) -> Self {
        Self {
            placeholder: placeholder.to_string(),
            ..Default::default()
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class_name(mut self, class_name: &str) -> Self {
        self.class_name = Some(class_name.to_string());
        self
    }

    /// Append typed text. A disabled input ignores typing.
    pub fn type_text(&mut self, text: &str) {
        if self.disabled {
            return;
        }
        self.value.push_str(text);
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn render(&self) -> Element {
        let mut element = Element::new("input")
            .class(cn!(INPUT_CLASSES, &self.class_name))
            .attr("type", "text")
            .attr("value", self.value.as_str())
            .bool_attr("disabled", self.disabled);
        if !self.placeholder.is_empty() {
            element = element.attr("placeholder", self.placeholder.as_str());
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Screen;

    #[test]
    fn test_renders_input_element() {
        let screen = Screen::render(Input::new("Test placeholder").render());
        let input = screen.get_by_placeholder("Test placeholder").unwrap();
        assert_eq!(input.tag, "input");
        assert_eq!(input.get_attr("value"), Some(""));
    }

    #[test]
    fn test_typing_updates_value() {
        let mut input = Input::new("Test placeholder");
        input.type_text("Test ");
        input.type_text("input");

        let screen = Screen::render(input.render());
        let element = screen.get_by_placeholder("Test placeholder").unwrap();
        assert_eq!(element.get_attr("value"), Some("Test input"));
    }

    #[test]
    fn test_disabled_ignores_typing() {
        let mut input = Input::new("Name").disabled(true);
        input.type_text("ignored");
        assert!(input.value.is_empty());
        assert!(input.render().is_disabled());
    }

    #[test]
    fn test_class_name_merged() {
        let element = Input::new("x").class_name("max-w-sm").render();
        assert!(element.has_class("rounded-md"));
        assert!(element.has_class("max-w-sm"));
    }
}
