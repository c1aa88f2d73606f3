//! Host render tree.
//!
//! Components render into `Node` values. The tree carries everything a
//! host needs: tag, attributes, classes, children and the bound click
//! handler. It also implements the native behaviors components rely on,
//! most importantly that a disabled element never dispatches clicks.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Callback bound to an element's click channel.
pub type ClickHandler = Rc<dyn Fn(&ClickEvent)>;

/// A user click delivered to an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickEvent {
    /// Consecutive click count (1 for a single click)
    pub detail: u32,
}

impl ClickEvent {
    pub fn new() -> Self {
        Self { detail: 1 }
    }
}

impl Default for ClickEvent {
    fn default() -> Self {
        Self::new()
    }
}

/// A node in the render tree.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Serialize this node to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_html(out),
            Node::Text(text) => out.push_str(&escape_text(text)),
        }
    }

    fn collect_text(&self, out: &mut String, skip_hidden: bool) {
        match self {
            Node::Element(element) => element.collect_text(out, skip_hidden),
            Node::Text(text) => out.push_str(text),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// An element node.
#[derive(Clone, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(rename = "class", skip_serializing_if = "String::is_empty")]
    pub classes: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(skip_serializing)]
    pub on_click: Option<ClickHandler>,
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("classes", &self.classes)
            .field("attributes", &self.attributes)
            .field("children", &self.children)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: String::new(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            on_click: None,
        }
    }

    /// Set an attribute, replacing any previous value.
    ///
    /// An empty value marks a boolean attribute such as `disabled`. `class`
    /// sets the class list. Names that are not valid attribute names are
    /// dropped.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        if name == "class" {
            self.classes = value.into();
            return self;
        }
        if !is_valid_attr_name(name) {
            tracing::debug!("Dropping invalid attribute name {:?} on <{}>", name, self.tag);
            return self;
        }
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// Set a boolean attribute when `enabled`, remove it otherwise.
    pub fn bool_attr(mut self, name: &str, enabled: bool) -> Self {
        if !is_valid_attr_name(name) || name == "class" {
            tracing::debug!("Dropping invalid boolean attribute {:?} on <{}>", name, self.tag);
            return self;
        }
        if enabled {
            self.attributes.insert(name.to_string(), String::new());
        } else {
            self.attributes.remove(name);
        }
        self
    }

    pub fn class(mut self, classes: impl Into<String>) -> Self {
        self.classes = classes.into();
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn on_click(mut self, handler: Option<ClickHandler>) -> Self {
        self.on_click = handler;
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.classes.split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list().any(|c| c == class)
    }

    pub fn is_disabled(&self) -> bool {
        self.attributes.contains_key("disabled")
    }

    pub fn is_aria_hidden(&self) -> bool {
        self.get_attr("aria-hidden") == Some("true")
    }

    /// Deliver a click with native semantics.
    ///
    /// Returns `false` when the element is disabled, in which case the
    /// handler is not run.
    pub fn dispatch_click(&self, event: &ClickEvent) -> bool {
        if self.is_disabled() {
            tracing::trace!("Click on disabled <{}> suppressed", self.tag);
            return false;
        }
        if let Some(handler) = &self.on_click {
            handler(event);
        }
        true
    }

    /// All text below this element, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out, false);
        out
    }

    /// Name exposed to assistive technology.
    ///
    /// `aria-label` wins; otherwise the visible text, ignoring subtrees
    /// marked `aria-hidden="true"`, with whitespace collapsed.
    pub fn accessible_name(&self) -> String {
        if let Some(label) = self.get_attr("aria-label") {
            return normalize_whitespace(label);
        }
        let mut out = String::new();
        self.collect_text(&mut out, true);
        normalize_whitespace(&out)
    }

    fn collect_text(&self, out: &mut String, skip_hidden: bool) {
        if skip_hidden && self.is_aria_hidden() {
            return;
        }
        for child in &self.children {
            child.collect_text(out, skip_hidden);
        }
    }

    /// Depth-first search over this element and its descendants.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |element| {
            if element.tag == tag {
                found.push(element);
            }
        });
        found
    }

    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.find_all(tag).into_iter().next()
    }

    fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        visit(self);
        for child in &self.children {
            if let Node::Element(element) = child {
                element.walk(visit);
            }
        }
    }

    /// Serialize this element to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&escape_attr(&self.classes));
            out.push('"');
        }
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            if !value.is_empty() {
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// HTML attribute name rule: non-empty, no whitespace, controls, quotes,
/// `>`, `/` or `=`.
fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '>' | '/' | '=' | '<')
        })
}

fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Query and interaction helper over a rendered tree.
///
/// Mirrors how a user finds things on screen: by role and accessible
/// name, by visible text, or by placeholder.
pub struct Screen {
    root: Element,
}

impl Screen {
    pub fn render(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Find the first element with `role` whose accessible name is `name`.
    pub fn get_by_role(&self, role: &str, name: &str) -> Option<&Element> {
        let mut found = None;
        self.root.walk(&mut |element| {
            if found.is_none() && role_of(element) == Some(role) && element.accessible_name() == name
            {
                found = Some(element);
            }
        });
        found
    }

    /// Find the innermost element whose text content is exactly `text`.
    ///
    /// Siblings are searched in document order and the first match wins.
    pub fn get_by_text(&self, text: &str) -> Option<&Element> {
        innermost_with_text(&self.root, text)
    }

    pub fn get_by_placeholder(&self, placeholder: &str) -> Option<&Element> {
        let mut found = None;
        self.root.walk(&mut |element| {
            if found.is_none() && element.get_attr("placeholder") == Some(placeholder) {
                found = Some(element);
            }
        });
        found
    }

    /// Click the element found by role and name.
    ///
    /// Returns `false` when nothing matched or the element swallowed the
    /// click because it is disabled.
    pub fn click(&self, role: &str, name: &str) -> bool {
        match self.get_by_role(role, name) {
            Some(element) => element.dispatch_click(&ClickEvent::new()),
            None => {
                tracing::debug!("No {} named {:?} to click", role, name);
                false
            }
        }
    }
}

fn innermost_with_text<'a>(element: &'a Element, text: &str) -> Option<&'a Element> {
    let inner = element
        .children
        .iter()
        .filter_map(Node::as_element)
        .find_map(|child| innermost_with_text(child, text));
    if inner.is_some() {
        return inner;
    }
    (normalize_whitespace(&element.text_content()) == text).then_some(element)
}

/// Implicit ARIA role, with an explicit `role` attribute taking precedence.
fn role_of(element: &Element) -> Option<&str> {
    if let Some(role) = element.get_attr("role") {
        return Some(role);
    }
    match element.tag.as_str() {
        "button" => Some("button"),
        "input" => Some("textbox"),
        "a" => Some("link"),
        "img" => Some("img"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_button(disabled: bool) -> (Element, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let handler: ClickHandler = Rc::new(move |_| counter.set(counter.get() + 1));
        let button = Element::new("button")
            .bool_attr("disabled", disabled)
            .on_click(Some(handler))
            .child(Node::text("Go"));
        (button, count)
    }

    #[test]
    fn test_dispatch_click_runs_handler() {
        let (button, count) = counting_button(false);
        assert!(button.dispatch_click(&ClickEvent::new()));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_disabled_element_swallows_click() {
        let (button, count) = counting_button(true);
        assert!(!button.dispatch_click(&ClickEvent::new()));
        assert!(!button.dispatch_click(&ClickEvent::new()));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_accessible_name_skips_hidden_subtrees() {
        let button = Element::new("button")
            .child(Element::new("svg").attr("aria-hidden", "true").child(Node::text("icon")))
            .child(Element::new("span").child(Node::text("  Next  ")));
        assert_eq!(button.accessible_name(), "Next");
        assert_eq!(button.text_content(), "icon  Next  ");
    }

    #[test]
    fn test_accessible_name_prefers_aria_label() {
        let button = Element::new("button")
            .attr("aria-label", "Close dialog")
            .child(Node::text("X"));
        assert_eq!(button.accessible_name(), "Close dialog");
    }

    #[test]
    fn test_to_html_escapes_and_renders_boolean_attributes() {
        let button = Element::new("button")
            .class("a b")
            .bool_attr("disabled", true)
            .attr("title", "say \"hi\"")
            .child(Element::new("span").child(Node::text("<Save & exit>")));
        assert_eq!(
            button.to_html(),
            "<button class=\"a b\" disabled title=\"say &quot;hi&quot;\">\
             <span>&lt;Save &amp; exit&gt;</span></button>"
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let input = Element::new("input").attr("placeholder", "Search");
        assert_eq!(input.to_html(), "<input placeholder=\"Search\">");
    }

    #[test]
    fn test_screen_queries() {
        let root = Element::new("div")
            .child(Element::new("button").child(Element::new("span").child(Node::text("One"))))
            .child(Element::new("input").attr("placeholder", "Type here"));
        let screen = Screen::render(root);

        assert!(screen.get_by_role("button", "One").is_some());
        assert!(screen.get_by_role("button", "Two").is_none());
        assert_eq!(screen.get_by_text("One").map(|e| e.tag.as_str()), Some("span"));
        assert_eq!(
            screen.get_by_placeholder("Type here").map(|e| e.tag.as_str()),
            Some("input")
        );
        assert!(!screen.click("button", "Missing"));
    }

    #[test]
    fn test_get_by_text_prefers_first_sibling() {
        let root = Element::new("div")
            .child(Element::new("button").attr("id", "first").child(Node::text("Save")))
            .child(Element::new("button").attr("id", "second").child(Node::text("Save")));
        let screen = Screen::render(root);

        let found = screen.get_by_text("Save").unwrap();
        assert_eq!(found.get_attr("id"), Some("first"));
    }

    #[test]
    fn test_attr_rejects_invalid_names() {
        let element = Element::new("button")
            .attr("data-x=\"1\" onclick=\"steal()\"", "")
            .attr("", "empty")
            .attr("on click", "x")
            .bool_attr("a/b", true)
            .attr("data-ok", "1");

        assert_eq!(element.attributes.len(), 1);
        assert_eq!(element.to_html(), "<button data-ok=\"1\"></button>");
    }

    #[test]
    fn test_attr_class_sets_class_list() {
        let element = Element::new("span").class("a").attr("class", "b c");
        assert!(element.attributes.is_empty());
        assert_eq!(element.to_html(), "<span class=\"b c\"></span>");
    }

    #[test]
    fn test_find_all_is_depth_first() {
        let root = Element::new("div")
            .child(Element::new("svg").attr("id", "first"))
            .child(Element::new("p").child(Element::new("svg").attr("id", "second")));
        let ids: Vec<_> = root
            .find_all("svg")
            .into_iter()
            .filter_map(|e| e.get_attr("id"))
            .collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_serialize_skips_handler() {
        let (button, _) = counting_button(false);
        let json = serde_json::to_value(&button).unwrap();
        assert_eq!(json["tag"], "button");
        assert!(json.get("on_click").is_none());
        assert_eq!(json["children"][0]["text"], "Go");
    }
}
