pub mod buffer;
pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::Buffer;
pub use document::{ClickDispatch, ClickSubscription, Document, ListenerId, Selector, SelectorError};
pub use element::Element;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use layout::{LayoutResult, Rect};
pub use terminal::Terminal;
pub use types::*;
