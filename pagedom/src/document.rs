//! The document: an element tree plus the listeners that hear every click on it.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

use thiserror::Error;

use crate::element::{
    find_by_class, find_element, find_element_mut, path_to, remove_element, Content, Element,
};
use crate::types::Display;

/// A stable lookup key for an element: `#id` or `.class`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    Id(String),
    Class(String),
}

impl Selector {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    /// Parse `#id` or `.class`.
    pub fn parse(s: &str) -> Result<Self, SelectorError> {
        let s = s.trim();
        let (ctor, name): (fn(String) -> Self, &str) = match s.chars().next() {
            None => return Err(SelectorError::Empty),
            Some('#') => (Self::Id, &s[1..]),
            Some('.') => (Self::Class, &s[1..]),
            Some(_) => return Err(SelectorError::MissingPrefix(s.to_string())),
        };

        if name.is_empty() {
            return Err(SelectorError::MissingName(s.to_string()));
        }

        Ok(ctor(name.to_string()))
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Id(id) => element.id == *id,
            Self::Class(class) => element.has_class(class),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
        }
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors from [`Selector::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Selector '{0}' must start with '#' or '.'")]
    MissingPrefix(String),

    #[error("Selector '{0}' has no name after its prefix")]
    MissingName(String),
}

/// Unique identifier for a document-wide click listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__listener_{}", self.0)
    }
}

type Registry = RwLock<BTreeSet<ListenerId>>;

/// A registered document-wide click listener.
///
/// The listener stays registered for as long as this value lives. Dropping it
/// unregisters the listener, so a widget holding one cannot leak it.
#[derive(Debug)]
pub struct ClickSubscription {
    id: ListenerId,
    registry: Weak<Registry>,
}

impl ClickSubscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// False once the document that issued this subscription is gone.
    pub fn is_active(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let Ok(set) = registry.read() else {
            return false;
        };
        set.contains(&self.id)
    }
}

impl Drop for ClickSubscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let Ok(mut set) = registry.write() else {
            return;
        };
        set.remove(&self.id);
        log::debug!("[document] Removed click listener {}", self.id);
    }
}

/// Result of delivering a click to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickDispatch {
    /// The element the click landed on.
    pub target: String,
    /// IDs from the document root down to `target`.
    pub path: Vec<String>,
    /// Document-wide listeners to notify, in registration order.
    pub listeners: Vec<ListenerId>,
}

impl ClickDispatch {
    pub fn passes_through(&self, id: &str) -> bool {
        self.path.iter().any(|step| step == id)
    }

    pub fn notifies(&self, listener: ListenerId) -> bool {
        self.listeners.contains(&listener)
    }
}

#[derive(Debug)]
pub struct Document {
    root: Element,
    images: HashMap<String, String>,
    listeners: Arc<Registry>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            images: HashMap::new(),
            listeners: Arc::new(RwLock::new(BTreeSet::new())),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// First element in document order matching `selector`.
    pub fn query(&self, selector: &Selector) -> Option<&Element> {
        match selector {
            Selector::Id(id) => self.get_element_by_id(id),
            Selector::Class(class) => find_by_class(&self.root, class),
        }
    }

    /// Whether `target` is `ancestor` itself or one of its descendants.
    ///
    /// Returns false when either element is not in the document.
    pub fn contains(&self, ancestor: &str, target: &str) -> bool {
        self.get_element_by_id(ancestor)
            .is_some_and(|element| find_element(element, target).is_some())
    }

    pub fn remove_element(&mut self, id: &str) -> Option<Element> {
        remove_element(&mut self.root, id)
    }

    // -------------------------------------------------------------------------
    // Mutation. Each returns false when the element is not in the document.
    // -------------------------------------------------------------------------

    pub fn set_display(&mut self, id: &str, display: Display) -> bool {
        let Some(element) = self.get_element_by_id_mut(id) else {
            return false;
        };
        element.display = display;
        true
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        let Some(element) = self.get_element_by_id_mut(id) else {
            return false;
        };
        element.content = Content::Text(text.into());
        true
    }

    /// Point an image element at a new source. A non-image element becomes one.
    pub fn set_image_src(&mut self, id: &str, new_src: impl Into<String>) -> bool {
        let Some(element) = self.get_element_by_id_mut(id) else {
            return false;
        };
        match &mut element.content {
            Content::Image { src, .. } => *src = new_src.into(),
            _ => {
                element.content = Content::Image {
                    src: new_src.into(),
                    alt: String::new(),
                };
            }
        }
        true
    }

    // -------------------------------------------------------------------------
    // Images
    // -------------------------------------------------------------------------

    /// Register the glyph drawn in place of the image at `src`.
    pub fn register_image(&mut self, src: impl Into<String>, glyph: impl Into<String>) {
        self.images.insert(src.into(), glyph.into());
    }

    pub fn with_image(mut self, src: impl Into<String>, glyph: impl Into<String>) -> Self {
        self.register_image(src, glyph);
        self
    }

    /// What to draw for an image: its registered glyph, else `alt`, else `src`.
    pub fn image_label<'a>(&'a self, src: &'a str, alt: &'a str) -> &'a str {
        if let Some(glyph) = self.images.get(src) {
            glyph
        } else if !alt.is_empty() {
            alt
        } else {
            src
        }
    }

    // -------------------------------------------------------------------------
    // Click listeners
    // -------------------------------------------------------------------------

    /// Register a listener that hears every click on the document.
    pub fn add_click_listener(&self) -> ClickSubscription {
        let id = ListenerId::new();
        if let Ok(mut set) = self.listeners.write() {
            set.insert(id);
        }
        log::debug!("[document] Added click listener {}", id);
        ClickSubscription {
            id,
            registry: Arc::downgrade(&self.listeners),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().map(|set| set.len()).unwrap_or(0)
    }

    /// Deliver a click on `target`.
    ///
    /// A click that hit nothing, or an element no longer in the document,
    /// lands on the root.
    pub fn dispatch_click(&self, target: Option<&str>) -> ClickDispatch {
        let path = target
            .and_then(|id| path_to(&self.root, id))
            .unwrap_or_else(|| vec![self.root.id.clone()]);
        let target = path.last().cloned().unwrap_or_else(|| self.root.id.clone());

        let listeners: Vec<ListenerId> = self
            .listeners
            .read()
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();

        log::trace!("[document] Click on {} via {:?}", target, path);

        ClickDispatch {
            target,
            path,
            listeners,
        }
    }
}
