//! UI Kit - Presentational components rendered to an explicit node tree.
//!
//! This crate provides the building blocks of the component library:
//!
//! - **Host tree**: `Node`/`Element` with HTML serialization, queries and
//!   click dispatch that honors native disabled semantics
//! - **Class names**: the `cn` merge utility
//! - **Components**: `Button` (variants, sizes, decorated icons) and `Input`
//! - **Icons**: built-in glyph descriptors and icon decoration
//! - **Hooks**: `use_engines` and `QueryParams`
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use ui_kit::{Button, ButtonSize, Icon, Screen};
//!
//! let clicks = Rc::new(Cell::new(0));
//! let counter = clicks.clone();
//!
//! let button = Button::new("Next")
//!     .size(ButtonSize::Md)
//!     .icon_right(Icon::arrow_right())
//!     .on_click(move |_| counter.set(counter.get() + 1));
//!
//! let screen = Screen::render(button.render());
//! assert!(screen.click("button", "Next"));
//! assert_eq!(clicks.get(), 1);
//! ```

pub mod class_names;
pub mod components;
pub mod dom;
pub mod hooks;
pub mod icons;

// Re-export commonly used types
pub use class_names::{cn, ClassValue};
pub use components::button::{Button, ButtonSize, ButtonVariant, BASE_CLASSES};
pub use components::input::Input;
pub use dom::{ClickEvent, ClickHandler, Element, Node, Screen};
pub use hooks::engines::{use_engines, Engine, EnginesClient, EnginesState};
pub use hooks::query_params::QueryParams;
pub use icons::{decorate_icon, Icon, IconSlot, ICON_CLASSES};

/// Error types for ui-kit operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    HttpStatus(u16),

    #[error("Unknown button variant: {0}")]
    UnknownVariant(String),

    #[error("Unknown button size: {0}")]
    UnknownSize(String),

    #[error("Unknown icon: {0}")]
    UnknownIcon(String),
}

/// Result type for ui-kit operations.
pub type Result<T> = std::result::Result<T, Error>;
