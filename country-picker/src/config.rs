//! Lookup keys the dropdown resolves against its page.

use std::fmt;

use pagedom::Selector;

pub const ROOT_CLASS: &str = "country-dropdown";
pub const ACTIVATOR_ID: &str = "dropdown-toggle";
pub const LIST_ID: &str = "dropdown-list";
pub const ICON_ID: &str = "selected-flag";
pub const CODE_ID: &str = "selected-code";

/// Data attribute carrying an option's icon reference.
pub const ICON_DATA: &str = "icon";
/// Data attribute carrying an option's display code.
pub const CODE_DATA: &str = "code";

/// The part an element plays in the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    Root,
    Activator,
    List,
    IconDisplay,
    TextDisplay,
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Root => "dropdown root",
            Self::Activator => "activator",
            Self::List => "option list",
            Self::IconDisplay => "icon display",
            Self::TextDisplay => "text display",
        };
        f.write_str(name)
    }
}

/// Where the dropdown finds its elements.
///
/// The defaults match the page built by [`crate::markup`].
///
/// # Example
///
/// ```
/// use country_picker::{DropdownConfig, Selector};
///
/// let config = DropdownConfig::default().list(Selector::id("phone-codes"));
/// assert_eq!(config.list.to_string(), "#phone-codes");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownConfig {
    pub root: Selector,
    pub activator: Selector,
    pub list: Selector,
    pub icon_display: Selector,
    pub text_display: Selector,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            root: Selector::class(ROOT_CLASS),
            activator: Selector::id(ACTIVATOR_ID),
            list: Selector::id(LIST_ID),
            icon_display: Selector::id(ICON_ID),
            text_display: Selector::id(CODE_ID),
        }
    }
}

impl DropdownConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, key: Selector) -> Self {
        self.root = key;
        self
    }

    pub fn activator(mut self, key: Selector) -> Self {
        self.activator = key;
        self
    }

    pub fn list(mut self, key: Selector) -> Self {
        self.list = key;
        self
    }

    pub fn icon_display(mut self, key: Selector) -> Self {
        self.icon_display = key;
        self
    }

    pub fn text_display(mut self, key: Selector) -> Self {
        self.text_display = key;
        self
    }

    /// Key for a role.
    pub fn key(&self, role: ElementRole) -> &Selector {
        match role {
            ElementRole::Root => &self.root,
            ElementRole::Activator => &self.activator,
            ElementRole::List => &self.list,
            ElementRole::IconDisplay => &self.icon_display,
            ElementRole::TextDisplay => &self.text_display,
        }
    }
}
