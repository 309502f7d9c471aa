//! The country-code dropdown controller.
//!
//! The open flag and the selection live on [`CountryDropdown`]; the page is a
//! render target written from them after every change.

use pagedom::{ClickDispatch, ClickSubscription, Display, Document, ListenerId, Selector};

use crate::config::{CODE_DATA, DropdownConfig, ElementRole, ICON_DATA};
use crate::error::DropdownError;

/// A page element resolved at mount time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRef {
    role: ElementRole,
    key: Selector,
    id: String,
}

impl ElementRef {
    fn resolve(doc: &Document, role: ElementRole, key: &Selector) -> Result<Self, DropdownError> {
        let Some(element) = doc.query(key) else {
            log::warn!("[dropdown] No {} matches {}", role, key);
            return Err(DropdownError::ElementNotFound {
                role,
                key: key.clone(),
            });
        };

        Ok(Self {
            role,
            key: key.clone(),
            id: element.id.clone(),
        })
    }

    pub fn role(&self) -> ElementRole {
        self.role
    }

    pub fn key(&self) -> &Selector {
        &self.key
    }

    /// ID of the element the key resolved to.
    pub fn id(&self) -> &str {
        &self.id
    }

    fn missing(&self) -> DropdownError {
        log::warn!("[dropdown] {} {} left the page", self.role, self.key);
        DropdownError::ElementNotFound {
            role: self.role,
            key: self.key.clone(),
        }
    }

    fn ensure(&self, doc: &Document) -> Result<(), DropdownError> {
        match doc.get_element_by_id(&self.id) {
            Some(_) => Ok(()),
            None => Err(self.missing()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownRefs {
    pub root: ElementRef,
    pub activator: ElementRef,
    pub list: ElementRef,
    pub icon_display: ElementRef,
    pub text_display: ElementRef,
}

impl DropdownRefs {
    /// Resolve every key in `config`, failing on the first missing element.
    pub fn resolve(doc: &Document, config: &DropdownConfig) -> Result<Self, DropdownError> {
        let resolve = |role| ElementRef::resolve(doc, role, config.key(role));
        Ok(Self {
            root: resolve(ElementRole::Root)?,
            activator: resolve(ElementRole::Activator)?,
            list: resolve(ElementRole::List)?,
            icon_display: resolve(ElementRole::IconDisplay)?,
            text_display: resolve(ElementRole::TextDisplay)?,
        })
    }
}

/// The committed (icon, code) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub icon: String,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

/// A country-code dropdown mounted on a [`Document`].
///
/// # Example
///
/// ```
/// use country_picker::{catalog, markup, CountryDropdown, DropdownConfig};
///
/// let us = catalog::find_by_iso("US").unwrap();
/// let mut doc = markup::page(catalog::countries(), us);
/// let mut dropdown = CountryDropdown::mount(&mut doc, &DropdownConfig::default()).unwrap();
///
/// dropdown.toggle(&mut doc).unwrap();
/// assert!(dropdown.is_open());
///
/// dropdown.select_entry(&mut doc, "/static/flags/in.png", "+91").unwrap();
/// assert!(!dropdown.is_open());
/// ```
#[derive(Debug)]
pub struct CountryDropdown {
    refs: DropdownRefs,
    /// Whether the option list is shown
    open: bool,
    /// Last committed entry (initially whatever the page displays)
    selection: Option<Selection>,
    /// Document-wide click listener, released with the widget
    subscription: ClickSubscription,
}

impl CountryDropdown {
    /// Resolve every element, subscribe to document clicks and render the
    /// list hidden.
    pub fn mount(doc: &mut Document, config: &DropdownConfig) -> Result<Self, DropdownError> {
        let refs = DropdownRefs::resolve(doc, config)?;
        let selection = read_selection(doc, &refs);
        let subscription = doc.add_click_listener();

        let mut dropdown = Self {
            refs,
            open: false,
            selection,
            subscription,
        };
        dropdown.render_open(doc, false)?;

        log::debug!(
            "[dropdown] Mounted on {} (listener {})",
            dropdown.refs.root.id(),
            dropdown.subscription.id()
        );
        Ok(dropdown)
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn refs(&self) -> &DropdownRefs {
        &self.refs
    }

    pub fn subscription_id(&self) -> ListenerId {
        self.subscription.id()
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Show the list if hidden, hide it if shown.
    pub fn toggle(&mut self, doc: &mut Document) -> Result<(), DropdownError> {
        self.render_open(doc, !self.open)
    }

    /// Commit `(icon, code)` to the displays and hide the list.
    ///
    /// All three targets are checked first, so a failure writes nothing.
    pub fn select_entry(
        &mut self,
        doc: &mut Document,
        icon: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<(), DropdownError> {
        self.refs.icon_display.ensure(doc)?;
        self.refs.text_display.ensure(doc)?;
        self.refs.list.ensure(doc)?;

        let selection = Selection {
            icon: icon.into(),
            code: code.into(),
        };

        if !doc.set_image_src(self.refs.icon_display.id(), selection.icon.as_str()) {
            return Err(self.refs.icon_display.missing());
        }
        if !doc.set_text(self.refs.text_display.id(), selection.code.as_str()) {
            return Err(self.refs.text_display.missing());
        }
        self.render_open(doc, false)?;

        log::debug!(
            "[dropdown] Selected {} ({})",
            selection.code,
            selection.icon
        );
        self.selection = Some(selection);
        Ok(())
    }

    /// Hide the list unless `target` lies inside the dropdown root.
    ///
    /// Clicks inside are left to [`toggle`](Self::toggle) and
    /// [`select_entry`](Self::select_entry).
    pub fn dismiss_on_outside_click(
        &mut self,
        doc: &mut Document,
        target: &str,
    ) -> Result<(), DropdownError> {
        self.refs.root.ensure(doc)?;

        if doc.contains(self.refs.root.id(), target) {
            log::trace!("[dropdown] Click on {} is inside, ignoring", target);
            return Ok(());
        }

        self.render_open(doc, false)
    }

    /// Route a document click the way a page bubbles it: the option or the
    /// activator under the pointer first, then the outside-click listener.
    pub fn handle_click(
        &mut self,
        doc: &mut Document,
        dispatch: &ClickDispatch,
    ) -> Result<EventResult, DropdownError> {
        let mut result = EventResult::Ignored;

        if let Some((icon, code)) = self.option_on_path(doc, dispatch) {
            self.select_entry(doc, icon, code)?;
            result = EventResult::Consumed;
        } else if dispatch.passes_through(self.refs.activator.id()) {
            self.toggle(doc)?;
            result = EventResult::Consumed;
        }

        if dispatch.notifies(self.subscription.id()) {
            self.dismiss_on_outside_click(doc, &dispatch.target)?;
        }

        Ok(result)
    }

    /// Release the document-wide listener and hand back the last selection.
    pub fn unmount(self) -> Option<Selection> {
        log::debug!("[dropdown] Unmounting from {}", self.refs.root.id());
        self.selection
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn render_open(&mut self, doc: &mut Document, open: bool) -> Result<(), DropdownError> {
        let display = if open { Display::Block } else { Display::None };
        if !doc.set_display(self.refs.list.id(), display) {
            return Err(self.refs.list.missing());
        }

        if self.open != open {
            log::debug!(
                "[dropdown] {} -> {}",
                if self.open { "shown" } else { "hidden" },
                if open { "shown" } else { "hidden" }
            );
        }
        self.open = open;
        Ok(())
    }

    /// The deepest option below the list on the click path, as (icon, code).
    fn option_on_path(&self, doc: &Document, dispatch: &ClickDispatch) -> Option<(String, String)> {
        let list_at = dispatch
            .path
            .iter()
            .position(|id| id == self.refs.list.id())?;

        dispatch.path[list_at + 1..].iter().rev().find_map(|id| {
            let element = doc.get_element_by_id(id)?;
            let icon = element.get_data(ICON_DATA)?;
            let code = element.get_data(CODE_DATA)?;
            Some((icon.clone(), code.clone()))
        })
    }
}

/// What the displays show right now, if both hold a value.
fn read_selection(doc: &Document, refs: &DropdownRefs) -> Option<Selection> {
    use pagedom::element::Content;

    let icon = match &doc.get_element_by_id(refs.icon_display.id())?.content {
        Content::Image { src, .. } => src.clone(),
        _ => return None,
    };
    let code = match &doc.get_element_by_id(refs.text_display.id())?.content {
        Content::Text(text) => text.clone(),
        _ => return None,
    };

    Some(Selection { icon, code })
}
