pub mod catalog;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod markup;
pub mod session;

pub use catalog::Country;
pub use config::{DropdownConfig, ElementRole};
pub use dropdown::{CountryDropdown, DropdownRefs, ElementRef, EventResult, Selection};
pub use error::DropdownError;
pub use pagedom::Selector;
