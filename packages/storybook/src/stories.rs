//! Button stories.
//!
//! Each story overrides the shared default args; the defaults pass empty
//! strings as icons, so stories without icons exercise the omission path.

use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use ui_kit::{Button, ButtonSize, ButtonVariant, Icon, IconSlot};

/// Alerts raised by interactive stories, in click order.
pub type Alerts = Rc<RefCell<Vec<String>>>;

const ICONS_ON_CLICK: &str = "With Icons OnClick!";

/// Args a story renders the button with.
#[derive(Debug, Clone)]
pub struct StoryArgs {
    pub text: String,
    pub icon_left: IconSlot,
    pub icon_right: IconSlot,
    pub variant: Option<ButtonVariant>,
    pub size: Option<ButtonSize>,
    /// Message raised when the button is clicked
    pub alert: Option<&'static str>,
}

impl Default for StoryArgs {
    fn default() -> Self {
        Self {
            text: "text".to_string(),
            icon_left: IconSlot::from(""),
            icon_right: IconSlot::from(""),
            variant: None,
            size: None,
            alert: None,
        }
    }
}

/// A named story.
#[derive(Debug, Clone)]
pub struct Story {
    pub name: &'static str,
    pub args: StoryArgs,
}

/// Manifest entry describing a story.
#[derive(Debug, Clone, Serialize)]
pub struct StoryEntry {
    pub id: String,
    pub name: &'static str,
    pub text: String,
    pub variant: ButtonVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ButtonSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_right: Option<String>,
    pub interactive: bool,
}

impl Story {
    /// Kebab-case identifier, used for file names and lookups.
    pub fn id(&self) -> String {
        let mut id = String::new();
        for (i, ch) in self.name.chars().enumerate() {
            if ch.is_ascii_uppercase() && i > 0 {
                id.push('-');
            }
            id.push(ch.to_ascii_lowercase());
        }
        id
    }

    /// Build the button for this story, recording alerts into `alerts`.
    pub fn button(&self, alerts: &Alerts) -> Button {
        let args = &self.args;
        let mut button = Button::new(&args.text)
            .icon_left(args.icon_left.clone())
            .icon_right(args.icon_right.clone());

        if let Some(variant) = args.variant {
            button = button.variant(variant);
        }
        if let Some(size) = args.size {
            button = button.size(size);
        }
        if let Some(message) = args.alert {
            let alerts = alerts.clone();
            button = button.on_click(move |_| {
                tracing::info!("{}", message);
                alerts.borrow_mut().push(message.to_string());
            });
        }

        button
    }

    pub fn entry(&self) -> StoryEntry {
        StoryEntry {
            id: self.id(),
            name: self.name,
            text: self.args.text.clone(),
            variant: self.args.variant.unwrap_or_default(),
            size: self.args.size,
            icon_left: icon_name(&self.args.icon_left),
            icon_right: icon_name(&self.args.icon_right),
            interactive: self.args.alert.is_some(),
        }
    }
}

fn icon_name(slot: &IconSlot) -> Option<String> {
    match slot {
        IconSlot::Element(icon) => Some(icon.name.clone()),
        _ => None,
    }
}

fn story(name: &'static str, args: StoryArgs) -> Story {
    Story { name, args }
}

fn with_icons(variant: ButtonVariant, left: bool, right: bool) -> StoryArgs {
    StoryArgs {
        icon_left: if left { Icon::arrow_right().into() } else { IconSlot::from("") },
        icon_right: if right { Icon::arrow_right().into() } else { IconSlot::from("") },
        variant: Some(variant),
        size: Some(ButtonSize::Md),
        ..Default::default()
    }
}

fn loading(variant: ButtonVariant) -> StoryArgs {
    StoryArgs {
        text: "Loading ...".to_string(),
        icon_left: Icon::loader().with_class("animate-spin").into(),
        variant: Some(variant),
        size: Some(ButtonSize::Md),
        ..Default::default()
    }
}

/// All Button stories, in display order.
pub fn all() -> Vec<Story> {
    use ButtonVariant::{Outline, Primary, Secondary};

    vec![
        story("Primary", StoryArgs::default()),
        story(
            "PrimaryDefaultButton",
            StoryArgs {
                text: "Run Scenario".to_string(),
                ..Default::default()
            },
        ),
        story("PrimaryWithLeftIcon", with_icons(Primary, true, false)),
        story("PrimaryWithRightIcon", with_icons(Primary, false, true)),
        story("PrimaryWithIcons", with_icons(Primary, true, true)),
        story(
            "PrimaryWithIconsOnClick",
            StoryArgs {
                alert: Some(ICONS_ON_CLICK),
                ..with_icons(Primary, true, true)
            },
        ),
        story("PrimaryWithLoading", loading(Primary)),
        story("SecondaryWithLeftIcon", with_icons(Secondary, true, false)),
        story("SecondaryWithRightIcon", with_icons(Secondary, false, true)),
        story("SecondaryWithIcons", with_icons(Secondary, true, true)),
        story(
            "SecondaryWithIconsOnClick",
            StoryArgs {
                alert: Some(ICONS_ON_CLICK),
                ..with_icons(Secondary, true, true)
            },
        ),
        story("SecondaryWithLoading", loading(Secondary)),
        story(
            "Outline",
            StoryArgs {
                text: "Back".to_string(),
                icon_left: Icon::arrow_left().into(),
                variant: Some(Outline),
                ..Default::default()
            },
        ),
    ]
}

/// Find a story by name or id, ignoring case.
pub fn find(key: &str) -> Option<Story> {
    all()
        .into_iter()
        .find(|s| s.name.eq_ignore_ascii_case(key) || s.id() == key.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui_kit::Screen;

    #[test]
    fn test_ids_are_kebab_case_and_unique() {
        let ids: Vec<_> = all().iter().map(Story::id).collect();
        assert_eq!(ids[0], "primary");
        assert!(ids.contains(&"primary-with-icons-on-click".to_string()));

        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_find_by_name_or_id() {
        assert_eq!(find("Outline").unwrap().name, "Outline");
        assert_eq!(find("primary-with-loading").unwrap().name, "PrimaryWithLoading");
        assert_eq!(find("secondarywithicons").unwrap().name, "SecondaryWithIcons");
        assert!(find("Ghost").is_none());
    }

    #[test]
    fn test_every_story_is_named_by_its_text() {
        let alerts = Alerts::default();
        for story in all() {
            let screen = Screen::render(story.button(&alerts).render());
            assert!(
                screen.get_by_role("button", &story.args.text).is_some(),
                "{} has no button named {:?}",
                story.name,
                story.args.text
            );
        }
    }

    #[test]
    fn test_default_args_render_no_icons() {
        let story = find("Primary").unwrap();
        let element = story.button(&Alerts::default()).render();
        assert!(element.find("svg").is_none());
        assert_eq!(story.entry().icon_left, None);
    }

    #[test]
    fn test_loading_story_keeps_spin_class() {
        let story = find("PrimaryWithLoading").unwrap();
        let element = story.button(&Alerts::default()).render();
        let svg = element.find("svg").unwrap();
        assert!(svg.has_class("animate-spin"));
        assert!(svg.has_class("w-4"));
    }

    #[test]
    fn test_on_click_story_raises_alert() {
        let alerts = Alerts::default();
        let story = find("SecondaryWithIconsOnClick").unwrap();
        let screen = Screen::render(story.button(&alerts).render());

        assert!(screen.click("button", "text"));
        assert_eq!(alerts.borrow().as_slice(), &[ICONS_ON_CLICK.to_string()]);
        assert!(story.entry().interactive);
    }

    #[test]
    fn test_outline_story_has_no_size() {
        let entry = find("Outline").unwrap().entry();
        assert_eq!(entry.variant, ButtonVariant::Outline);
        assert_eq!(entry.size, None);
        assert_eq!(entry.icon_left.as_deref(), Some("arrow-left"));
    }
}
